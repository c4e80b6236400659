use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::session::Phase,
};

/// Message pump between external event sources and the pure core
///
/// Raw messages are translated to domain messages against the current
/// state, domain messages run through `update`, and the produced commands
/// are queued for the executor.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without an executor (pure message processing)
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with a command executor wired to its own
    /// channels, so ticker ticks and picked quotes flow back in
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(
            runtime.raw_msg_tx.clone(),
            runtime.msg_tx.clone(),
        ));
        runtime
    }

    /// Access the executor for service injection (name store, quote source)
    pub fn executor_mut(&mut self) -> Option<&mut CmdExecutor> {
        self.cmd_executor.as_mut()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get sender for message transmission from other tasks
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("{msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Process all messages in queues and channels
    ///
    /// Raw messages are translated one at a time, each against the state
    /// left by its predecessors; translating a whole batch up front would
    /// read stale state (e.g. two queued keystrokes both extending the same
    /// old name).
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        loop {
            // Drain external channels into the internal queues
            while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
                self.raw_msg_queue.push_back(raw_msg);
            }
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.msg_queue.push_back(msg);
            }

            if let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
                continue;
            }

            if let Some(raw_msg) = self.raw_msg_queue.pop_front() {
                let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
                for msg in domain_msgs {
                    all_commands.extend(self.process_message(msg));
                }
                continue;
            }

            break;
        }

        all_commands
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> crate::Result<Vec<String>> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        match &mut self.cmd_executor {
            Some(executor) => executor.execute_commands(&commands),
            None => Err(color_eyre::eyre::eyre!(
                "No command executor available. Use new_with_executor() to configure."
            )),
        }
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> crate::Result<Vec<String>> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            phase: self.state.phase(),
            completions: self.state.session.completions,
            remaining_secs: self.state.session.remaining_secs,
            has_executor: self.cmd_executor.is_some(),
            has_live_ticker: self
                .cmd_executor
                .as_ref()
                .is_some_and(CmdExecutor::has_live_ticker),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub phase: Phase,
    pub completions: u32,
    pub remaining_secs: Option<u64>,
    pub has_executor: bool,
    pub has_live_ticker: bool,
}
