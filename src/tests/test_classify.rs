use std::path::{Path, PathBuf};

use crate::classify::{classify, Category, Destination};

#[test]
fn test_music_bank_nests_under_its_name() {
    let destination = classify("Music_Forest.bank");

    assert_eq!(destination.category, Category::Music);
    assert_eq!(destination.subfolder, "Music_Forest");
    assert_eq!(
        destination.under(Path::new("out")),
        PathBuf::from("out").join("Music").join("Music_Forest")
    );
}

#[test]
fn test_sfx_bank_nests_under_its_name() {
    let destination = classify("SFX_Wind.bank");

    assert_eq!(destination.category, Category::Sfx);
    assert_eq!(
        destination.under(Path::new("out")),
        PathBuf::from("out").join("SFX").join("SFX_Wind")
    );
}

#[test]
fn test_everything_else_goes_to_other() {
    for name in ["Ambience.bank", "music_lowercase.bank", "Musical.bank", "SFX.bank", "_SFX_x.bank"] {
        assert_eq!(classify(name).category, Category::Other, "{name}");
    }

    assert_eq!(
        classify("Master.strings.bank"),
        Destination {
            category: Category::Other,
            subfolder: "Master.strings".to_string(),
        }
    );
}

#[test]
fn test_names_without_extension_are_kept_whole() {
    assert_eq!(classify("Music_NoExt").subfolder, "Music_NoExt");
    assert_eq!(classify(".bank").subfolder, ".bank");
    assert_eq!(classify("").category, Category::Other);
}

#[test]
fn test_category_folder_names() {
    let names: Vec<_> = Category::ALL.iter().map(|c| c.folder_name()).collect();
    assert_eq!(names, ["Music", "SFX", "Other"]);
    assert_eq!(Category::Sfx.to_string(), "SFX");
}
