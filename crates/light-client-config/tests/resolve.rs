use std::{
    io::Write,
    path::{Path, PathBuf},
};

use alloy_primitives::{b256, B256};
use light_client_config::{
    networks::{GOERLI, MAINNET, SEPOLIA},
    ConfigError, ConfigSelectors, ForkLoadError, GenesisParameter, LightClientConfig,
};
use rstest::rstest;
use tempfile::NamedTempFile;

const CUSTOM_FORKS: &str = r#"
CONFIG_NAME: 'devnet'
GENESIS_FORK_VERSION: '0x10000038'
ALTAIR_FORK_VERSION: '0x20000038'
ALTAIR_FORK_EPOCH: 0
BELLATRIX_FORK_VERSION: '0x30000038'
BELLATRIX_FORK_EPOCH: 4
"#;

fn sepolia_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/sepolia-config.yaml")
}

fn custom_config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn custom_selectors(file: &NamedTempFile) -> ConfigSelectors {
    ConfigSelectors {
        custom_config: Some(file.path().to_path_buf()),
        genesis_root: Some("0xAA".to_string()),
        genesis_time: Some(1000),
        ..Default::default()
    }
}

#[test_log::test]
fn no_selectors_defaults_to_mainnet() {
    let config = ConfigSelectors::default().resolve().unwrap();
    assert_eq!(config, *MAINNET);
}

#[test_log::test]
fn goerli_preset() {
    let config = ConfigSelectors {
        goerli: Some(true),
        ..Default::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(config.chain.genesis_root, GOERLI.chain.genesis_root);
    assert_eq!(config.chain.genesis_time, GOERLI.chain.genesis_time);
    assert_eq!(config.chain.forks, GOERLI.chain.forks);
    assert_eq!(config, *GOERLI);
}

#[rstest]
#[case::mainnet(ConfigSelectors { mainnet: Some(true), ..Default::default() }, &*MAINNET)]
#[case::sepolia(ConfigSelectors { sepolia: Some(true), ..Default::default() }, &*SEPOLIA)]
#[case::mainnet_false(ConfigSelectors { mainnet: Some(false), ..Default::default() }, &*MAINNET)]
#[case::goerli_false(ConfigSelectors { goerli: Some(false), ..Default::default() }, &*MAINNET)]
fn preset_selection(#[case] selectors: ConfigSelectors, #[case] expected: &LightClientConfig) {
    assert_eq!(&selectors.resolve().unwrap(), expected);
}

#[rstest]
#[case::mainnet_goerli(Some(true), Some(true), None, false, &["mainnet", "goerli"])]
#[case::mainnet_sepolia(Some(true), None, Some(true), false, &["mainnet", "sepolia"])]
#[case::goerli_sepolia(None, Some(true), Some(true), false, &["goerli", "sepolia"])]
#[case::mainnet_custom(Some(true), None, None, true, &["mainnet", "beacon.config"])]
#[case::goerli_custom(None, Some(true), None, true, &["goerli", "beacon.config"])]
#[case::all(
    Some(true),
    Some(true),
    Some(true),
    true,
    &["mainnet", "goerli", "sepolia", "beacon.config"]
)]
#[case::set_false_still_counts(Some(false), Some(true), None, false, &["mainnet", "goerli"])]
fn conflicting_selectors(
    #[case] mainnet: Option<bool>,
    #[case] goerli: Option<bool>,
    #[case] sepolia: Option<bool>,
    #[case] custom: bool,
    #[case] expected: &[&str],
) {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        mainnet,
        goerli,
        sepolia,
        custom_config: custom.then(|| file.path().to_path_buf()),
        genesis_root: custom.then(|| "0xAA".to_string()),
        genesis_time: custom.then_some(1000),
        ..Default::default()
    };
    match selectors.resolve() {
        Err(ConfigError::ConflictingSelectors { selectors }) => assert_eq!(selectors, expected),
        other => panic!("expected conflicting selectors, got {other:?}"),
    }
}

#[test_log::test]
fn custom_config_with_short_genesis_root() {
    let file = custom_config_file(CUSTOM_FORKS);
    let config = custom_selectors(&file).resolve().unwrap();

    assert_eq!(config.chain.genesis_root[0], 0xaa);
    assert!(config.chain.genesis_root[1..].iter().all(|byte| *byte == 0));
    assert_eq!(config.chain.genesis_time, 1000);
    assert_eq!(config.checkpoint, B256::ZERO);

    let names: Vec<&str> = config
        .chain
        .forks
        .iter()
        .map(|fork| fork.name.as_str())
        .collect();
    assert_eq!(names, ["GENESIS", "ALTAIR", "BELLATRIX"]);
    assert_eq!(config.chain.fork_at_epoch(0).unwrap().name, "ALTAIR");
    assert_eq!(config.chain.fork_at_epoch(4).unwrap().name, "BELLATRIX");
}

#[test_log::test]
fn custom_config_with_checkpoint() {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        checkpoint: Some(
            "0x9c30624f15e4df4e8f819f89db8b930f36b561b7f70905688ea208d22fb0b822".to_string(),
        ),
        ..custom_selectors(&file)
    };
    let config = selectors.resolve().unwrap();
    assert_eq!(
        config.checkpoint,
        b256!("0x9c30624f15e4df4e8f819f89db8b930f36b561b7f70905688ea208d22fb0b822")
    );
}

#[test_log::test]
fn custom_config_matching_a_preset() {
    let selectors = ConfigSelectors {
        custom_config: Some(sepolia_config_path()),
        genesis_root: Some(SEPOLIA.chain.genesis_root.to_string()),
        genesis_time: Some(SEPOLIA.chain.genesis_time),
        checkpoint: Some(SEPOLIA.checkpoint.to_string()),
        ..Default::default()
    };
    assert_eq!(selectors.resolve().unwrap(), *SEPOLIA);
}

#[test_log::test]
fn custom_config_missing_genesis_time() {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        genesis_time: None,
        ..custom_selectors(&file)
    };
    let err = selectors.resolve().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingGenesisParameter(GenesisParameter::Time)
    ));
    assert!(err.to_string().contains("genesis time"));
}

#[test_log::test]
fn custom_config_missing_genesis_root() {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        genesis_root: None,
        genesis_time: None,
        ..custom_selectors(&file)
    };
    assert!(matches!(
        selectors.resolve().unwrap_err(),
        ConfigError::MissingGenesisParameter(GenesisParameter::Root)
    ));
}

#[rstest]
#[case::mainnet_with_root(
    ConfigSelectors {
        mainnet: Some(true),
        genesis_root: Some("0xAA".to_string()),
        ..Default::default()
    },
    GenesisParameter::Root
)]
#[case::default_with_time(
    ConfigSelectors { genesis_time: Some(1000), ..Default::default() },
    GenesisParameter::Time
)]
#[case::goerli_with_both(
    ConfigSelectors {
        goerli: Some(true),
        genesis_root: Some("0xAA".to_string()),
        genesis_time: Some(1000),
        ..Default::default()
    },
    GenesisParameter::Root
)]
fn orphaned_genesis_override(
    #[case] selectors: ConfigSelectors,
    #[case] expected: GenesisParameter,
) {
    match selectors.resolve() {
        Err(ConfigError::OrphanedGenesisOverride(parameter)) => assert_eq!(parameter, expected),
        other => panic!("expected orphaned genesis override, got {other:?}"),
    }
}

#[test_log::test]
fn invalid_checkpoint_hex() {
    let selectors = ConfigSelectors {
        checkpoint: Some("0x12g4".to_string()),
        ..Default::default()
    };
    match selectors.resolve() {
        Err(ConfigError::InvalidHexEncoding { field, value, .. }) => {
            assert_eq!(field, "beacon.checkpoint");
            assert_eq!(value, "0x12g4");
        }
        other => panic!("expected invalid hex, got {other:?}"),
    }
}

#[test_log::test]
fn invalid_genesis_root_hex() {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        genesis_root: Some("0xnothex".to_string()),
        ..custom_selectors(&file)
    };
    assert!(matches!(
        selectors.resolve().unwrap_err(),
        ConfigError::InvalidHexEncoding {
            field: "beacon.genesis.gvroot",
            ..
        }
    ));
}

#[test_log::test]
fn oversized_checkpoint() {
    let selectors = ConfigSelectors {
        checkpoint: Some(format!("0x{}", "ab".repeat(33))),
        ..Default::default()
    };
    assert!(matches!(
        selectors.resolve().unwrap_err(),
        ConfigError::InvalidHexEncoding { .. }
    ));
}

#[test_log::test]
fn checkpoint_overrides_preset_default() {
    let config = ConfigSelectors {
        goerli: Some(true),
        checkpoint: Some("0x0102".to_string()),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    assert_eq!(
        config.checkpoint,
        b256!("0x0102f4f0a378e2c4ae0a9ee97407eb69d0d737d8d8cd0a5fb1093f42f7b81c49")
    );
    assert_eq!(&config.checkpoint[2..], &GOERLI.checkpoint[2..]);
    assert_eq!(config.chain, GOERLI.chain);
}

#[test_log::test]
fn full_checkpoint_replaces_preset_default() {
    let config = ConfigSelectors {
        checkpoint: Some(
            "0x9c30624f15e4df4e8f819f89db8b930f36b561b7f70905688ea208d22fb0b822".to_string(),
        ),
        ..Default::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(
        config.checkpoint,
        b256!("0x9c30624f15e4df4e8f819f89db8b930f36b561b7f70905688ea208d22fb0b822")
    );
    assert_eq!(config.chain, MAINNET.chain);
}

#[test_log::test]
fn empty_checkpoint_keeps_preset_default() {
    let config = ConfigSelectors {
        sepolia: Some(true),
        checkpoint: Some("0x".to_string()),
        ..Default::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(config, *SEPOLIA);
}

#[test_log::test]
fn short_checkpoint_in_custom_mode() {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        checkpoint: Some("0xbeef".to_string()),
        ..custom_selectors(&file)
    };
    let config = selectors.resolve().unwrap();

    let mut expected = B256::ZERO;
    expected[0] = 0xbe;
    expected[1] = 0xef;
    assert_eq!(config.checkpoint, expected);
}

#[test_log::test]
fn invalid_checkpoint_on_preset_fails() {
    let selectors = ConfigSelectors {
        mainnet: Some(true),
        checkpoint: Some("0x01zz".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        selectors.resolve().unwrap_err(),
        ConfigError::InvalidHexEncoding {
            field: "beacon.checkpoint",
            ..
        }
    ));
}

#[test_log::test]
fn default_mainnet_preset_literals() {
    let config = ConfigSelectors::default().resolve().unwrap();
    let root = b256!("0xe7928a5608c8748de824906249149e1279fd118a1b05970caff2594770c6c772");
    assert_eq!(config.chain.genesis_root, root);
    assert_eq!(config.chain.genesis_time, 1724336895);
    assert_eq!(config.checkpoint, root);
    assert_eq!(config.chain.forks.len(), 5);
}

#[test_log::test]
fn missing_fork_schedule_file() {
    let selectors = ConfigSelectors {
        custom_config: Some(PathBuf::from("/nonexistent/config.yaml")),
        genesis_root: Some("0xAA".to_string()),
        genesis_time: Some(1000),
        ..Default::default()
    };
    match selectors.resolve() {
        Err(err @ ConfigError::ForkScheduleLoadError { .. }) => {
            assert!(err.to_string().contains("/nonexistent/config.yaml"));
            let ConfigError::ForkScheduleLoadError { path, source } = err else {
                unreachable!()
            };
            assert_eq!(path, PathBuf::from("/nonexistent/config.yaml"));
            assert!(matches!(source, ForkLoadError::Io(_)));
        }
        other => panic!("expected fork schedule load error, got {other:?}"),
    }
}

#[test_log::test]
fn malformed_fork_schedule_file() {
    let file = custom_config_file("GENESIS_FORK_VERSION: '0x00000000'\nALTAIR_FORK_EPOCH: 10\n");
    match custom_selectors(&file).resolve() {
        Err(ConfigError::ForkScheduleLoadError { source, .. }) => {
            assert!(matches!(source, ForkLoadError::MissingForkVersion(name) if name == "ALTAIR"))
        }
        other => panic!("expected fork schedule load error, got {other:?}"),
    }
}

#[test_log::test]
fn resolution_is_idempotent() {
    let file = custom_config_file(CUSTOM_FORKS);
    let selectors = ConfigSelectors {
        checkpoint: Some("0xdeadbeef".to_string()),
        ..custom_selectors(&file)
    };
    let first = selectors.resolve().unwrap();
    let second = selectors.resolve().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}
