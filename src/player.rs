/// External media player launcher
///
/// Videos are handed to the player as its only argument. The caller
/// never waits on the player; a detached thread reaps it once it exits.

use std::io;
use std::process::{Command, Stdio};
use std::thread;

#[derive(Debug, Clone)]
pub struct Player {
    program: String,
}

impl Player {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Launch the player on `video_path` and return its process id
    /// without waiting for it
    pub fn open(&self, video_path: &str) -> io::Result<u32> {
        println!("▶️  Opening {} with {}", video_path, self.program);
        let mut child = Command::new(&self.program)
            .arg(video_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let pid = child.id();
        thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(pid)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}
