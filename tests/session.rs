use pkgview::runtime::{load_session, Options};
use pkgview::{handle_event, initialize, Action, Attribute, Event, Key, Package, PkgviewError};
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "repositories": [
    {
      "name": "core",
      "packages": [
        { "name": "bash", "version": "5.2", "description": "The GNU Bourne Again shell" },
        { "name": "zsh", "version": "5.9", "description": "A very advanced shell" }
      ]
    },
    {
      "name": "extra",
      "packages": [
        { "name": "fish", "version": "3.7", "description": "Smart and user friendly shell" },
        { "name": "bash", "version": "9.9" }
      ]
    }
  ],
  "installed": [
    { "name": "bash", "version": "5.2", "install_reason": "explicit" },
    { "name": "zsh", "version": "5.8", "install_reason": "dependency" },
    { "name": "yay", "version": "12.0", "description": "AUR helper" }
  ]
}"#;

fn session_dir(config: &str) -> (TempDir, Options) {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    let config_path = dir.path().join("pkgview.toml");
    fs::write(&catalog, CATALOG).unwrap();
    fs::write(
        &config_path,
        format!("catalog = {:?}\n{config}", catalog.display().to_string()),
    )
    .unwrap();
    let options = Options {
        config_path: Some(config_path),
        catalog: None,
    };
    (dir, options)
}

fn names<'a>(packages: impl Iterator<Item = &'a Package>) -> Vec<&'a str> {
    packages.map(Package::name).collect()
}

#[test]
fn startup_macro_chain_runs_after_load() {
    let (_dir, options) = session_dir(
        "[macros]\nstartup = \"@installed, by-repo\"\ninstalled = \"/I:^(installed|outdated)$\"\nby-repo = \".r\"\n",
    );
    let (config, loaded) = load_session(&options).unwrap();
    let (mut state, _theme) = initialize(&config);
    state.reposition(17, 4);

    let actions = handle_event(&mut state, &loaded);
    assert!(actions.is_empty());
    assert_eq!(names(state.view()), vec!["bash", "zsh", "yay"]);
    assert_eq!(state.sorted_by(), Attribute::Repository);
    assert_eq!(state.filter_description(), "I:^(installed|outdated)$");
}

#[test]
fn merged_catalog_exposes_install_details() {
    let (_dir, options) = session_dir("");
    let (config, loaded) = load_session(&options).unwrap();
    let (mut state, _theme) = initialize(&config);
    handle_event(&mut state, &loaded);

    let find = |name: &str| {
        state
            .catalog()
            .iter()
            .find(|p| p.name() == name)
            .unwrap()
            .clone()
    };
    assert_eq!(find("bash").attribute(Attribute::Repository), "core");
    assert_eq!(find("bash").attribute(Attribute::InstallState), "installed");
    assert_eq!(find("zsh").attribute(Attribute::InstallState), "outdated");
    assert_eq!(
        find("zsh").attribute(Attribute::InstallReason),
        "Installed as a dependency for another package"
    );
    assert_eq!(find("fish").attribute(Attribute::InstallState), "not installed");
    assert_eq!(find("yay").attribute(Attribute::Repository), "local");
}

#[test]
fn exec_macro_substitutes_queue() {
    let (_dir, options) = session_dir("[macros]\n2 = \"!sudo pacman -S %p\"\n");
    let (config, loaded) = load_session(&options).unwrap();
    let (mut state, _theme) = initialize(&config);
    handle_event(&mut state, &loaded);

    handle_event(&mut state, &Event::Key(Key::Right));
    handle_event(&mut state, &Event::Key(Key::Right));
    let actions = handle_event(&mut state, &Event::Key(Key::Char('2')));
    assert_eq!(
        actions,
        vec![Action::Exec {
            command: "sudo pacman -S bash fish".to_string()
        }]
    );
}

#[test]
fn missing_catalog_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let options = Options {
        config_path: None,
        catalog: Some(dir.path().join("absent.json")),
    };
    let Err(err) = load_session(&options) else {
        panic!("expected an error");
    };
    assert!(matches!(err, PkgviewError::Catalog(_) | PkgviewError::Config(_)));
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("pkgview.toml");
    fs::write(&config_path, "macros = 3\n").unwrap();
    let options = Options {
        config_path: Some(config_path),
        catalog: None,
    };
    assert!(matches!(load_session(&options), Err(PkgviewError::Config(_))));
}
