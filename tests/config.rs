use camino::Utf8PathBuf;

use tesseract_assets::config::{ConfigLoader, FetchOptions};
use tesseract_assets::domain::AssetSet;

#[test]
fn flags_switch_capabilities_independently() {
    let resolved = ConfigLoader::resolve(FetchOptions {
        target_dir: Some(Utf8PathBuf::from("assets/ocr")),
        assets: AssetSet::Core,
        no_confirm: true,
        no_ignore_file: false,
        yes: false,
        non_interactive: true,
    })
    .unwrap();

    assert_eq!(resolved.target_dir, Utf8PathBuf::from("assets/ocr"));
    assert_eq!(resolved.assets.len(), 2);
    assert!(!resolved.confirm_existing);
    assert!(resolved.write_ignore_file);
    assert!(!resolved.interactive);
}
