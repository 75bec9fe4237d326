use yamledit::config::Config;
use yamledit::file::loader::load_document;
use yamledit::file::saver::save_document;

const DOC: &str = "server:\n  host: localhost\n  port: 8080\n";

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    let config = Config::default();

    save_document(&path, DOC, &config).expect("Failed to save document");
    let loaded = load_document(&path).expect("Failed to load document");

    assert_eq!(loaded, DOC);
}

#[test]
fn test_gzip_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml.gz");
    let config = Config::default();

    save_document(&path, DOC, &config).expect("Failed to save gzipped document");

    // The file on disk is compressed, not plain text.
    let raw = std::fs::read(&path).expect("Failed to read raw bytes");
    assert!(raw.starts_with(&[0x1f, 0x8b]));

    let loaded = load_document(&path).expect("Failed to load gzipped document");
    assert_eq!(loaded, DOC);
}

#[test]
fn test_backup_keeps_previous_content() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    let config = Config {
        create_backup: true,
    };

    save_document(&path, "first: 1\n", &config).expect("Failed to save first version");
    save_document(&path, "second: 2\n", &config).expect("Failed to save second version");

    let backup = dir.path().join("config.yaml.bak");
    let backed_up = std::fs::read_to_string(&backup).expect("Backup file missing");
    assert_eq!(backed_up, "first: 1\n");

    let current = load_document(&path).expect("Failed to load current version");
    assert_eq!(current, "second: 2\n");
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    let config = Config::default();

    save_document(&path, DOC, &config).expect("Failed to save document");

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_edit_loaded_document_and_save() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    let config = Config::default();

    save_document(&path, DOC, &config).expect("Failed to seed document");

    let text = load_document(&path).expect("Failed to load document");
    let updated = yamledit::update(&text, "server.port", &9090).expect("Failed to update port");
    save_document(&path, &updated, &config).expect("Failed to save updated document");

    let reloaded = load_document(&path).expect("Failed to reload document");
    let port: u16 = yamledit::read(&reloaded, "server.port").expect("Failed to read port");
    assert_eq!(port, 9090);

    let host: String = yamledit::read(&reloaded, "server.host").expect("Failed to read host");
    assert_eq!(host, "localhost");
}
