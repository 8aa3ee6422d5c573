// tests/integration_tests/session_test.rs
use anyhow::Result;
use mte::{Session, Theme, load_session, save_session};
use tempfile::TempDir;

use super::common::create_test_file;

#[test]
fn test_session_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("session.toml");
    std::fs::create_dir_all(dir.path().join("nested"))?;

    let mut session = Session {
        text: Some(String::from("# Notes\n- one\n")),
        title: Some(String::from("Notes")),
        ..Session::default()
    };
    session.set_theme(Theme::Dark);

    save_session(&path, &session)?;
    let restored = load_session(&path)?;
    assert_eq!(restored, session);
    assert_eq!(restored.saved_theme(), Some(Theme::Dark));
    Ok(())
}

#[test]
fn test_handwritten_session_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(
        dir.path(),
        "session.toml",
        "mte_text_v1 = \"\"\"\nfirst\nsecond\"\"\"\nmte_theme_v1 = \"neon\"\n",
    )?;

    let session = load_session(&path)?;
    assert_eq!(session.text(), "first\nsecond");
    assert!(session.saved_theme().is_none(), "Unknown theme falls back");
    assert_eq!(Theme::infer(session.saved_theme(), true), Theme::Dark);
    Ok(())
}

#[test]
fn test_unreadable_session_keeps_file_intact() -> Result<()> {
    let dir = TempDir::new()?;
    let path = create_test_file(dir.path(), "session.toml", "not = [valid")?;

    assert!(load_session(&path).is_err());
    assert_eq!(std::fs::read_to_string(&path)?, "not = [valid");
    Ok(())
}
