use roomsearch::application::scan::scan_dataset;
use roomsearch::domain::error::DomainError;
use std::fs;
use std::path::Path;

fn touch(path: &Path) {
    fs::write(path, b"fake image bytes").unwrap();
}

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn scan_orders_categories_then_filenames() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("Bedroom")).unwrap();
    fs::create_dir(root.path().join("Kitchen")).unwrap();
    touch(&root.path().join("Kitchen/ka.jpg"));
    touch(&root.path().join("Bedroom/z2.jpg"));
    touch(&root.path().join("Bedroom/a1.jpg"));

    let records = scan_dataset(root.path(), &categories(&["Bedroom", "Kitchen"])).unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a1", "z2", "ka"]);
    assert_eq!(records[0].room_type, "Bedroom");
    assert_eq!(records[0].filename, "a1.jpg");
    assert!(records[0].img_full_path.ends_with("Bedroom/a1.jpg"));
    assert_eq!(records[2].room_type, "Kitchen");
}

#[test]
fn scan_keeps_only_image_files() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("Bathroom")).unwrap();
    touch(&root.path().join("Bathroom/tub.jpg"));
    touch(&root.path().join("Bathroom/sink.PNG"));
    touch(&root.path().join("Bathroom/notes.txt"));
    touch(&root.path().join("Bathroom/noext"));

    let records = scan_dataset(root.path(), &categories(&["Bathroom"])).unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["sink", "tub"]);
}

#[test]
fn scan_empty_category_is_not_an_error() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("Dinning")).unwrap();

    let records = scan_dataset(root.path(), &categories(&["Dinning"])).unwrap();
    assert!(records.is_empty());
}

#[test]
fn scan_missing_category_fails() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("Bedroom")).unwrap();

    let err = scan_dataset(root.path(), &categories(&["Bedroom", "Livingroom"])).unwrap_err();
    assert!(matches!(err, DomainError::Scan(_)));
    assert!(err.to_string().contains("Livingroom"));
}
