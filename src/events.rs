use std::io;
use std::sync::mpsc;
use std::thread;

use nix::sys::signal::SigSet;
use unsegen::input::Input;

use crate::config::Config;

pub enum Event {
    Input(Input),
    Update,
}

/// Funnels terminal input, periodic ticks and terminal resizes into a single
/// channel consumed by the UI loop.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    _input_handle: thread::JoinHandle<()>,
    _tick_handle: thread::JoinHandle<()>,
    _signal_handle: thread::JoinHandle<()>,
}

impl Dispatcher {
    pub fn from_config(config: &Config, signals: SigSet) -> Dispatcher {
        let tick_rate = config.tick_rate;
        let (tx, rx) = mpsc::channel();

        // Block the signals here so the watcher thread (which inherits the
        // mask) is the only one to receive them.
        signals
            .thread_block()
            .expect("Failed to set signal mask for event threads");

        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for event in Input::read_all(stdin) {
                    if let Ok(input) = event {
                        if tx.send(Event::Input(input)).is_err() {
                            return;
                        }
                    }
                }
            })
        };

        let tick_handle = {
            let tx = tx.clone();
            thread::spawn(move || loop {
                if tx.send(Event::Update).is_err() {
                    return;
                }
                thread::sleep(tick_rate);
            })
        };

        let signal_handle = thread::spawn(move || loop {
            if signals.wait().is_err() {
                return;
            }
            if tx.send(Event::Update).is_err() {
                return;
            }
        });

        Dispatcher {
            rx,
            _input_handle: input_handle,
            _tick_handle: tick_handle,
            _signal_handle: signal_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
