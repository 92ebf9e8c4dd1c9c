use chrono::{NaiveDate, NaiveDateTime};
use logclient_cli::console::Console;
use logclient_cli::session::{
    MenuChoice, Session, SessionState, Termination, AUTO_ENTRIES, DISCONNECT_MESSAGE,
    NOISY_NOTICE,
};
use logclient_core::{FixedClock, FormatTemplate, LogSender};

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 1)
        .and_then(|d| d.and_hms_opt(9, 5, 3))
        .expect("valid test instant")
}

/// Runs a scripted session and returns (termination, console output, wire lines)
fn run_script(script: &str) -> (Termination, String, Vec<String>) {
    let mut console_out = Vec::new();
    let mut wire = Vec::new();

    let termination = {
        let console = Console::new(script.as_bytes(), &mut console_out);
        let session = Session::new(console, LogSender::new(&mut wire), FixedClock(instant()));
        session.run().expect("session should not fault")
    };

    let console_out = String::from_utf8(console_out).expect("console output is UTF-8");
    let wire = String::from_utf8(wire).expect("wire output is UTF-8");
    let lines = wire.lines().map(str::to_string).collect();
    (termination, console_out, lines)
}

#[test]
fn exit_sends_single_disconnect_entry() {
    let (termination, console, lines) = run_script("4\n");

    assert_eq!(termination, Termination::Graceful);
    assert_eq!(
        lines,
        vec![format!("[2024-07-01 09:05:03 AM] [Info]: {DISCONNECT_MESSAGE}")]
    );
    assert!(console.contains("Exiting the program."));
}

#[test]
fn auto_sends_five_entries_with_chosen_template() {
    let (termination, _, lines) = run_script("1\n3\n4\n");

    assert_eq!(termination, Termination::Graceful);
    assert_eq!(lines.len(), AUTO_ENTRIES.len() + 1);

    for ((level, message), line) in AUTO_ENTRIES.iter().zip(&lines) {
        assert_eq!(
            line,
            &format!("{message}: [{level}] 2024-07-01 09:05:03 AM")
        );
    }
    // Disconnect uses the template active at exit time
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Client disconnected from the server: [Info] 2024-07-01 09:05:03 AM")
    );
}

#[test]
fn manual_entry_accepts_name_or_ordinal() {
    let (_, _, lines) = run_script("2\n2\ndisk is full\nWarning\n2\n1\nboom\n5\n4\n");

    assert_eq!(
        lines,
        vec![
            "[Warning] 2024-07-01 09:05:03 AM: disk is full".to_string(),
            "[2024-07-01 09:05:03 AM] [Fatal]: boom".to_string(),
            "[2024-07-01 09:05:03 AM] [Info]: Client disconnected from the server".to_string(),
        ]
    );
}

#[test]
fn invalid_level_discards_message() {
    let (termination, console, lines) = run_script("2\n9\nhello\nBanana\n4\n");

    assert_eq!(termination, Termination::Graceful);
    assert!(console.contains("Invalid log level. Log message not sent."));
    assert!(console.contains("Invalid option. Keeping the current log format."));
    // Only the disconnect entry, still in the default layout
    assert_eq!(
        lines,
        vec!["[2024-07-01 09:05:03 AM] [Info]: Client disconnected from the server".to_string()]
    );
}

#[test]
fn noisy_drops_connection_without_sending() {
    let (termination, console, lines) = run_script("3\n1\n1\n4\n");

    assert_eq!(termination, Termination::Noisy);
    assert!(console.contains(NOISY_NOTICE));
    assert!(lines.is_empty(), "nothing may be sent after noisy: {lines:?}");
    assert!(!console.contains("Exiting the program."));
}

#[test]
fn invalid_menu_option_loops() {
    let (termination, console, lines) = run_script("7\nhello\n4\n");

    assert_eq!(termination, Termination::Graceful);
    assert_eq!(console.matches("Invalid option. Please try again.").count(), 2);
    assert_eq!(console.matches("Menu:").count(), 3);
    assert_eq!(lines.len(), 1);
}

#[test]
fn closed_input_exits_gracefully() {
    let (termination, _, lines) = run_script("");
    assert_eq!(termination, Termination::Graceful);
    assert_eq!(lines.len(), 1);

    // Input closed mid-manual: nothing from the abandoned entry is sent
    let (termination, _, lines) = run_script("2\n1\npartial message\n");
    assert_eq!(termination, Termination::Graceful);
    assert_eq!(
        lines,
        vec!["[2024-07-01 09:05:03 AM] [Info]: Client disconnected from the server".to_string()]
    );
}

#[test]
fn step_walks_the_state_machine() {
    let mut console_out = Vec::new();
    let mut wire = Vec::new();
    let console = Console::new("2\n".as_bytes(), &mut console_out);
    let mut session = Session::new(console, LogSender::new(&mut wire), FixedClock(instant()));

    assert_eq!(session.state(), SessionState::MenuWait);

    let state = session
        .step(MenuChoice::Invalid("x".into()))
        .expect("invalid option is not a fault");
    assert_eq!(state, SessionState::MenuWait);

    // Configures preset 2 then sends the five auto entries
    let state = session.step(MenuChoice::Auto).expect("auto succeeds");
    assert_eq!(state, SessionState::MenuWait);
    assert_eq!(session.sent(), 5);
    assert_eq!(session.template(), &FormatTemplate::preset(2).unwrap());

    let state = session.step(MenuChoice::Noisy).expect("noisy succeeds");
    assert_eq!(state, SessionState::Terminated(Termination::Noisy));
    assert_eq!(session.sent(), 5);
}
