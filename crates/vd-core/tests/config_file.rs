use std::fs;

use vd_core::{GeneratorConfig, generate_with_config};

#[test]
fn test_config_file_drives_generation() {
    let path = std::env::temp_dir().join(format!("vd-config-{}.json", std::process::id()));
    let config = GeneratorConfig::new(4)
        .with_seed(1234)
        .with_max_placement_attempts(500);
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = GeneratorConfig::load_from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, config);

    let a = generate_with_config(&loaded).unwrap();
    let b = generate_with_config(&config).unwrap();
    assert_eq!(a.seed, 1234);
    assert_eq!(a, b);
    assert_eq!(a.grid.size(), 25);
}
