//! HTTP layer tests: error mapping and router tests driven through
//! `tower::ServiceExt::oneshot`.
