//! Visibility across the demo fixture set, role by role.

use super::helpers::{PlainHasher, Workspace};
use rstest::rstest;
use std::sync::Arc;
use taskdesk::access::AccessPolicy;
use taskdesk::bootstrap::{Services, Stores, seed};
use taskdesk::config::BootstrapConfig;

async fn demo_workspace() -> Workspace {
    let stores = Stores::in_memory();
    let services = Services::new(&stores, Arc::new(PlainHasher), AccessPolicy::default());
    let config = BootstrapConfig {
        demo_data: true,
        ..BootstrapConfig::default()
    };
    seed(&services, &stores, &config)
        .await
        .expect("demo data should seed");
    Workspace { stores, services }
}

#[rstest]
#[case::admin("admin", "admin123", 5)]
#[case::ceo("ceo", "ceo123", 4)]
#[case::manager("manager", "manager123", 4)]
#[case::employee1("employee1", "emp123", 3)]
#[case::employee2("employee2", "emp456", 3)]
#[tokio::test(flavor = "multi_thread")]
async fn each_demo_account_sees_its_slice(
    #[case] username: &str,
    #[case] password: &str,
    #[case] expected: usize,
) -> Result<(), eyre::Report> {
    let workspace = demo_workspace().await;
    let viewer = workspace.services.users.authenticate(username, password).await?;

    let board = workspace.services.tasks.list(&viewer).await?;

    eyre::ensure!(
        board.len() == expected,
        "{username} saw {} tasks, expected {expected}",
        board.len()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_admin_sees_admin_assigned_documentation() -> Result<(), eyre::Report> {
    let workspace = demo_workspace().await;
    let ceo = workspace.services.users.authenticate("ceo", "ceo123").await?;

    let titles: Vec<String> = workspace
        .services
        .tasks
        .list(&ceo)
        .await?
        .into_iter()
        .map(|row| row.title.as_str().to_owned())
        .collect();

    eyre::ensure!(!titles.iter().any(|title| title == "Документация"));
    eyre::ensure!(workspace.stores.tasks.list_all().await?.len() == 5);
    Ok(())
}
