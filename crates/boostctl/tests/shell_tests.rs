//! Shell integration tests
//!
//! Drive `shell::run` with scripted input against one session.

use boost_common::flags::FlagStore;
use boost_common::{BoostConfig, Session};
use boostctl::shell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(dir: &TempDir, script: &str) -> (Session, String) {
    let store = FlagStore::new(dir.path().join("flags.json"));
    let mut session = Session::with_flag_store(BoostConfig::default(), store).unwrap();
    let mut out = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);
    shell::run(&mut session, Cursor::new(script), &mut out, &mut rng).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_status_then_award() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "status\naward 251\nstatus\n");
    assert_eq!(session.points(), 1501);
    assert!(out.contains("251 points to Achiever"));
    assert!(out.contains("Level up!"));
    assert_eq!(session.status().current_tier.id, 3);
}

#[test]
fn test_errors_do_not_stop_the_shell() {
    let dir = TempDir::new().unwrap();
    let script = "achievements --claim 3\nbogus\naward 10\n";
    let (session, out) = run_script(&dir, script);
    // Task Crusher is not completed yet
    assert!(out.contains("[E3002]"));
    assert_eq!(session.points(), 1260);
}

#[test]
fn test_claim_once() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "achievements --claim 1\nachievements --claim 1\n");
    assert_eq!(session.points(), 1300);
    assert!(out.contains("[E3003]"));
}

#[test]
fn test_card_plays_run_out() {
    let dir = TempDir::new().unwrap();
    let script = "cards draw\ncards draw\ncards draw\ncards draw\n";
    let (session, out) = run_script(&dir, script);
    assert_eq!(session.cards().plays_left(), 0);
    assert_eq!(session.cards().collection().len(), 6);
    assert!(out.contains("[E4001]"));
}

#[test]
fn test_share_grants_plays() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "cards share twitter\ncards share copy\n");
    assert_eq!(session.cards().plays_left(), 5);
    assert!(out.contains("+2 plays"));
}

#[test]
fn test_quoted_task_title() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "tasks --add \"Write blog post\" --priority medium\n");
    assert!(out.contains("Added task 5"));
    assert_eq!(session.tasks().get(5).unwrap().title, "Write blog post");
}

#[test]
fn test_business_flow() {
    let dir = TempDir::new().unwrap();
    let script = "\
menu
team
pricing --buy-business --seats 3
menu
team --invite someone@company.com --role manager
team --invite someone@company.com
team --invite not-an-email
";
    let (session, out) = run_script(&dir, script);
    assert!(out.contains("[E2006]"));
    assert!(out.contains("2.397.000 ₫"));
    assert!(out.contains("Invitation sent to someone@company.com (manager)"));
    assert!(out.contains("[E2003]"));
    assert!(out.contains("[E2002]"));
    assert!(session.is_business_unlocked());
    assert_eq!(session.menu_items().len(), 10);
}

#[test]
fn test_wallet_top_up() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "wallet --topup 6 --method bank\n");
    assert_eq!(session.wallet().balance(), 3_850_000);
    assert!(out.contains("2.600.000 ₫"));
    assert!(out.contains("2000 ms"));
}

#[test]
fn test_coach_and_exit() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "coach What should I do next?\nexit\ncoach ignored\n");
    assert!(out.contains("high-energy window"));
    assert_eq!(session.coach().history().len(), 3);
}

#[test]
fn test_nested_shell_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, out) = run_script(&dir, "shell\n# comment\n\n");
    assert!(out.contains("Already in the shell"));
}

#[test]
fn test_huge_focus_length_keeps_shell_alive() {
    let dir = TempDir::new().unwrap();
    let (session, out) = run_script(&dir, "focus --minutes 100000000\nstatus\n");
    assert_eq!(session.focus().length_secs(), 480 * 60);
    assert!(out.contains("251 points to Achiever"));
}

#[test]
fn test_journal_and_settings() {
    let dir = TempDir::new().unwrap();
    let script = "\
journal --answer \"Felt sharp\" --next
journal --back
journal --next
journal --next
journal --next
settings --ai-level 75 --toggle sound
greet
";
    let (session, out) = run_script(&dir, script);
    assert!(out.contains("Journal saved (1/3 answered)"));
    assert_eq!(session.journal().entries()[0].answers[0], "Felt sharp");
    assert!(out.contains("Full AI"));
    assert!(!session.settings().sound);
    assert!(out.contains(", Minh Anh"));
}
