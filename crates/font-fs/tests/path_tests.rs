use assert_fs::prelude::*;
use font_fs::{InstallPath, NormalizedPath, validate_file_name};
use predicates::prelude::*;
use proptest::prelude::*;

#[test]
fn test_install_layout_resolves_under_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(InstallPath::Stylesheet.as_str())
        .write_str("body {}")
        .unwrap();
    temp.child(InstallPath::FontDir.as_str())
        .create_dir_all()
        .unwrap();

    let root = NormalizedPath::new(temp.path());
    assert!(root.join(InstallPath::Stylesheet.as_str()).is_file());
    temp.child(InstallPath::FontDir.as_str())
        .assert(predicate::path::is_dir());

    temp.child("public/css/user.css")
        .assert(predicate::str::contains("body"));
}

proptest! {
    #[test]
    fn test_validated_names_stay_in_directory(name in "\\PC{1,64}") {
        if validate_file_name(&name).is_ok() {
            let base = NormalizedPath::new("/srv/fonts");
            let joined = base.join(&name);
            prop_assert_eq!(joined.as_str(), format!("/srv/fonts/{}", name));
            prop_assert_eq!(joined.file_name(), Some(name.as_str()));
        }
    }
}
