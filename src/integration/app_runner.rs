use color_eyre::eyre::Result;
use ratatui::prelude::Rect;

use crate::{
    core::{raw_msg::RawMsg, state::AppState},
    infrastructure::{config::Config, name_store::NameStore, tui},
    integration::runtime::Runtime,
    presentation::components::{home::Home, status_bar::StatusBar},
};

/// Drives the whole application: terminal events in, rendering out
///
/// In headless mode (tests, non-interactive environments) no terminal is
/// created and the loop idles between update cycles; events arrive through
/// the runtime's channels instead.
pub struct AppRunner<'a> {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    runtime: Runtime,
    tui: Option<tui::Tui>,
    home: Home<'a>,
    status_bar: StatusBar,
}

impl AppRunner<'_> {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64, headless: bool) -> Result<Self> {
        let saved_name = if config.persist_name {
            NameStore::at_default_location().load()
        } else {
            None
        };
        let state = AppState::new(config.clone()).with_saved_name(saved_name);

        let mut runtime = Runtime::new_with_executor(state);
        if config.persist_name {
            if let Some(executor) = runtime.executor_mut() {
                executor.set_name_store(NameStore::at_default_location());
            }
        }

        let tui = if headless {
            None
        } else {
            Some(tui::Tui::new()?.tick_rate(tick_rate).frame_rate(frame_rate))
        };

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            runtime,
            tui,
            home: Home::new(),
            status_bar: StatusBar::new(),
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop: terminal events in, state updates, rendering out
    pub async fn run(&mut self) -> Result<()> {
        if let Some(tui) = &mut self.tui {
            tui.enter()?;
        }

        loop {
            let event = match &mut self.tui {
                Some(tui) => tui.next().await,
                None => {
                    // Headless: yield briefly to avoid a busy loop
                    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                    None
                }
            };

            if let Some(e) = event {
                match e {
                    tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                    tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                    tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                    tui::Event::Render => self.render()?,
                    tui::Event::Resize(w, h) => self.resize(w, h)?,
                    _ => {}
                }
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("update cycle failed: {e}");
            }

            if self.runtime.state().system.should_suspend {
                if let Some(tui) = &mut self.tui {
                    tui.suspend()?;
                }
                self.runtime.send_raw_msg(RawMsg::Resume);
                if self.tui.is_some() {
                    let tui = tui::Tui::new()?
                        .tick_rate(self.tick_rate)
                        .frame_rate(self.frame_rate);
                    self.tui = Some(tui);
                    if let Some(tui) = &mut self.tui {
                        tui.enter()?;
                    }
                }
            } else if self.runtime.state().system.should_quit {
                break;
            }
        }

        if let Some(tui) = &mut self.tui {
            tui.exit()?;
        }
        Ok(())
    }

    fn resize(&mut self, w: u16, h: u16) -> Result<()> {
        if let Some(tui) = &mut self.tui {
            tui.resize(Rect::new(0, 0, w, h))?;
        }
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let Self {
            tui,
            home,
            status_bar,
            runtime,
            ..
        } = self;
        let state = runtime.state().clone();
        if let Some(tui) = tui {
            tui.draw(|f| {
                let area = f.area();
                home.render(f, area, &state);
                status_bar.draw(&state, f, area);
            })?;
        }
        Ok(())
    }
}
