//! Loading `AppConfig` from YAML files on disk

use std::io::Write;

use ship_registry::prelude::*;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
server:
  host: 0.0.0.0
  port: 3000
log_filter: "ship_registry=debug"
seed_ships:
  - name: Orion III
    planet: Mars
    shipType: MERCHANT
    prodDate: 32503680000000
    isUsed: true
    speed: 0.82
    crewSize: 617
  - name: Daedalus
    planet: Jupiter
    shipType: Transport
    prodDate: 32345913600000
    speed: 0.04
    crewSize: 14
"#,
    );

    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.log_filter, "ship_registry=debug");
    assert_eq!(config.seed_ships.len(), 2);
    assert_eq!(config.seed_ships[1].ship_type, Some(ShipType::Transport));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    assert!(AppConfig::from_yaml_file(path.to_str().unwrap()).is_err());
}

#[tokio::test]
async fn test_seed_ships_pass_through_service() {
    let file = write_config(
        r#"
seed_ships:
  - name: Orion III
    planet: Mars
    shipType: MERCHANT
    prodDate: 32503680000000
    isUsed: true
    speed: 0.82
    crewSize: 617
  - name: Broken
    planet: Mars
    shipType: MERCHANT
    prodDate: 32503680000000
    speed: 0.82
    crewSize: 0
"#,
    );
    let config = AppConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    let store = InMemoryShipStore::new();
    let service = ShipQueryService::new(store.clone());
    let mut rejected = 0;
    for seed in config.seed_ships {
        if service.create(seed).await.is_err() {
            rejected += 1;
        }
    }

    assert_eq!(rejected, 1);
    assert_eq!(store.len().unwrap(), 1);

    let ship = service.get("1").await.unwrap();
    // 80 * 0.82 * 0.5 / 20
    assert_eq!(ship.rating, 1.64);
    assert_eq!(ship.production_year(), 3000);
}
