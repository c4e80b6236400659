use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::{sleep, timeout};

use cheerdown::{
    core::{
        cmd::CountdownCmd,
        msg::{session::SessionMsg, system::SystemMsg, Msg},
        update::update,
    },
    domain::session::Phase,
    AppState, Cmd, Config, RawMsg, Runtime, VERSION,
};

/// Basic library flow test
#[test]
fn test_library_basic_flow() {
    let initial_state = AppState::new(Config::default());

    // Test basic message processing
    let (state, cmds) = update(
        Msg::Session(SessionMsg::NameChanged("Ada".to_string())),
        initial_state,
    );
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(cmds, vec![Cmd::Countdown(CountdownCmd::StopTicker)]);

    // Test starting the countdown
    let (mut state, cmds) = update(Msg::Session(SessionMsg::Start), state);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.session.remaining_secs, Some(10));
    assert_eq!(cmds, vec![Cmd::Countdown(CountdownCmd::StartTicker)]);

    // Run the countdown to completion
    let mut final_cmds = vec![];
    for _ in 0..10 {
        let (next, cmds) = update(Msg::Session(SessionMsg::Tick), state);
        state = next;
        final_cmds = cmds;
    }

    assert_eq!(state.phase(), Phase::Completed);
    assert_eq!(state.session.completions, 1);
    assert_eq!(
        state.session.status_message.as_deref(),
        Some("You did it, Ada! You've completed the timer 1 times!")
    );
    assert_eq!(
        final_cmds,
        vec![Cmd::Countdown(CountdownCmd::StopTicker), Cmd::PickQuote]
    );
}

/// Runtime integration test
#[test]
fn test_runtime_integration() {
    let initial_state = AppState::new(Config::default());
    let mut runtime = Runtime::new(initial_state);

    // Test runtime message processing
    runtime.send_msg(Msg::Session(SessionMsg::NameChanged("Ada".to_string())));
    runtime.process_all_messages();

    assert_eq!(runtime.state().phase(), Phase::Ready);

    // Test statistics
    let stats = runtime.get_stats();
    assert_eq!(stats.queued_messages, 0);
    assert_eq!(stats.phase, Phase::Ready);
    assert_eq!(stats.completions, 0);
}

/// Version information test
#[test]
fn test_version_info() {
    assert!(!VERSION.is_empty());
    println!("Cheerdown version: {VERSION}");
}

/// Complex workflow integration test
#[test]
fn test_complex_workflow() {
    let initial_state = AppState::new(Config::default());
    let mut runtime = Runtime::new(initial_state);

    // 1. Type a name and start
    runtime.send_msg(Msg::Session(SessionMsg::NameChanged("Ada".to_string())));
    runtime.send_msg(Msg::Session(SessionMsg::SelectDuration(20)));
    runtime.send_msg(Msg::Session(SessionMsg::Start));
    let commands = runtime.process_all_messages();

    assert_eq!(runtime.state().phase(), Phase::Running);
    assert_eq!(runtime.state().session.remaining_secs, Some(20));
    assert!(commands.contains(&Cmd::Countdown(CountdownCmd::StartTicker)));

    // 2. Halfway through, reset
    for _ in 0..10 {
        runtime.send_raw_msg(RawMsg::CountdownTick);
    }
    runtime.process_all_messages();
    assert_eq!(runtime.state().session.remaining_secs, Some(10));

    runtime.send_msg(Msg::Session(SessionMsg::Reset));
    let commands = runtime.process_all_messages();

    assert_eq!(runtime.state().phase(), Phase::Idle);
    assert!(commands.contains(&Cmd::Countdown(CountdownCmd::StopTicker)));

    // 3. A stale tick changes nothing
    runtime.send_raw_msg(RawMsg::CountdownTick);
    runtime.process_all_messages();
    assert_eq!(runtime.state().session.remaining_secs, None);
}

/// Quit flows through the system messages
#[test]
fn test_quit_integration() {
    let mut runtime = Runtime::new(AppState::new(Config::default()));

    runtime.send_msg(Msg::System(SystemMsg::Quit));
    runtime.process_all_messages();

    assert!(runtime.state().system.should_quit);
}

/// Asynchronous message processing integration test
#[tokio::test]
async fn test_async_message_handling() {
    let initial_state = AppState::new(Config::default());
    let mut runtime = Runtime::new(initial_state);

    // Type "Ada" and press Enter from another task via the raw channel
    let raw_sender = runtime.get_raw_sender();
    let handle = tokio::spawn(async move {
        sleep(Duration::from_millis(10)).await;
        for ch in "Ada".chars() {
            raw_sender
                .send(RawMsg::Key(KeyEvent::new(
                    KeyCode::Char(ch),
                    KeyModifiers::NONE,
                )))
                .expect("send");
        }
        raw_sender
            .send(RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .expect("send");
    });

    let joined = timeout(Duration::from_millis(100), handle).await.expect("task");
    joined.expect("task panicked");

    sleep(Duration::from_millis(20)).await;
    let commands = runtime.process_all_messages();

    // Each keystroke extended the name, then Enter armed the countdown
    assert_eq!(runtime.state().session.name, "Ada");
    assert_eq!(runtime.state().phase(), Phase::Running);
    assert!(commands.contains(&Cmd::Countdown(CountdownCmd::StartTicker)));
}

/// Performance test
#[test]
fn test_performance_many_messages() {
    let mut runtime = Runtime::new(AppState::new(Config::default()));
    runtime.send_msg(Msg::Session(SessionMsg::NameChanged("Ada".to_string())));
    runtime.process_all_messages();

    let start = Instant::now();

    // 1000 full countdown rounds
    for _ in 0..1000 {
        runtime.send_msg(Msg::Session(SessionMsg::Start));
        for _ in 0..10 {
            runtime.send_msg(Msg::Session(SessionMsg::Tick));
        }
        runtime.process_all_messages();
    }

    let elapsed = start.elapsed();
    println!("Processed 1000 countdown rounds in {elapsed:?}");

    assert_eq!(runtime.state().session.completions, 1000);
    assert!(elapsed < Duration::from_millis(500));
}
