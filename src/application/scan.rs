use crate::domain::entities::image_record::ImageRecord;
use crate::domain::error::DomainError;
use std::fs;
use std::path::Path;

/// Category subdirectories of the house room dataset, in scan order.
pub const DEFAULT_ROOM_CATEGORIES: [&str; 5] =
    ["Bathroom", "Bedroom", "Dinning", "Kitchen", "Livingroom"];

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Walk `root/<category>` for each category in the given order and build one
/// record per image file. Files are listed in lexical filename order; the id
/// is the filename without its extension. A category with no images is fine;
/// a category directory that does not exist is not.
pub fn scan_dataset(root: &Path, categories: &[String]) -> Result<Vec<ImageRecord>, DomainError> {
    let mut records = Vec::new();
    for category in categories {
        let dir = root.join(category);
        if !dir.is_dir() {
            return Err(DomainError::Scan(format!(
                "missing category directory: {}",
                dir.display()
            )));
        }
        let mut paths: Vec<_> = fs::read_dir(&dir)
            .map_err(|e| DomainError::Scan(format!("failed to list {}: {e}", dir.display())))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        paths.sort();

        for path in paths {
            let filename = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let id = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            records.push(ImageRecord {
                id,
                room_type: category.clone(),
                filename,
                img_full_path: path.display().to_string(),
            });
        }
    }
    Ok(records)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
