//! Blocking external-process boundary. The scorer's merged stdout/stderr is
//! the only data channel back; its exit code signals success.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Result, RougeError};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Outcome of one successful scorer run.
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    /// stdout bytes followed by stderr bytes.
    pub merged: Vec<u8>,
}

/// Run the command to completion, draining stdout and stderr on their own
/// threads so neither pipe can fill up and stall the child. A non-zero exit
/// becomes a [`RougeError::Process`] carrying everything the child printed;
/// exceeding `timeout` kills the child and fails with [`RougeError::Timeout`].
pub fn run(mut command: Command, timeout: Option<Duration>) -> Result<ProcessOutput> {
    info!(program = %command.get_program().to_string_lossy(), "invoking scorer");
    command.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|e| {
        RougeError::io(
            format!("failed to spawn scorer {}", command.get_program().to_string_lossy()),
            e,
        )
    })?;

    // Both pipes exist: stdout/stderr were set to piped above.
    let stdout = child.stdout.take().expect("stdout is piped");
    let stderr = child.stderr.take().expect("stderr is piped");
    let stdout_reader = thread::spawn(move || drain(stdout));
    let stderr_reader = thread::spawn(move || drain(stderr));

    let status = match timeout {
        None => child
            .wait()
            .map_err(|e| RougeError::io("failed to wait for scorer", e))?,
        Some(limit) => wait_with_timeout(&mut child, limit)?,
    };

    let mut merged = stdout_reader.join().unwrap_or_default();
    merged.extend(stderr_reader.join().unwrap_or_default());

    debug!(%status, bytes = merged.len(), "scorer finished");

    if !status.success() {
        return Err(RougeError::Process {
            status,
            output: String::from_utf8_lossy(&merged).into_owned(),
        });
    }
    Ok(ProcessOutput { status, merged })
}

fn drain(mut pipe: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    let _ = pipe.read_to_end(&mut buf);
    buf
}

fn wait_with_timeout(child: &mut Child, limit: Duration) -> Result<ExitStatus> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child
            .try_wait()
            .map_err(|e| RougeError::io("failed to poll scorer", e))?
        {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(RougeError::Timeout { timeout_secs: limit.as_secs() });
        }
        thread::sleep(POLL_INTERVAL);
    }
}
