use crate::walker::{TreeWalker, WalkStream};
use crate::ScanError;
use camino::Utf8PathBuf;
use fscheck_domain::WalkQuery;
use std::io::{BufRead, BufReader};
use std::process::{Child, ChildStdout, Command, Stdio};

/// Walker that shells out to an external `find`, one process per walk.
///
/// Standard error is inherited so `find`'s own diagnostics reach the operator.
#[derive(Clone, Debug)]
pub struct FindWalker {
    program: Utf8PathBuf,
}

impl FindWalker {
    pub fn new(program: impl Into<Utf8PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TreeWalker for FindWalker {
    fn name(&self) -> &str {
        self.program.as_str()
    }

    fn walk<'a>(&'a self, query: &'a WalkQuery) -> Result<WalkStream<'a>, ScanError> {
        let program = self.program.to_string();
        let mut child = Command::new(self.program.as_std_path())
            .args(query.to_find_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ScanError::Start {
                program: program.clone(),
                source,
            })?;

        let Some(stdout) = child.stdout.take() else {
            reap(&mut child);
            return Err(ScanError::Start {
                program,
                source: std::io::Error::other("stdout was not captured"),
            });
        };

        Ok(Box::new(FindOutput {
            program,
            child,
            reader: BufReader::new(stdout),
            buf: Vec::new(),
            done: false,
        }))
    }
}

/// Streams one path per stdout line, then checks the exit status.
struct FindOutput {
    program: String,
    child: Child,
    reader: BufReader<ChildStdout>,
    buf: Vec<u8>,
    done: bool,
}

impl FindOutput {
    fn finish(&mut self) -> Option<Result<String, ScanError>> {
        self.done = true;
        match self.child.wait() {
            Ok(status) if status.success() => None,
            Ok(status) => Some(Err(ScanError::Exit {
                program: self.program.clone(),
                status,
            })),
            Err(source) => Some(Err(ScanError::Read {
                program: self.program.clone(),
                source,
            })),
        }
    }
}

impl Iterator for FindOutput {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => self.finish(),
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(source) => {
                self.done = true;
                reap(&mut self.child);
                Some(Err(ScanError::Read {
                    program: self.program.clone(),
                    source,
                }))
            }
        }
    }
}

impl Drop for FindOutput {
    fn drop(&mut self) {
        if !self.done {
            reap(&mut self.child);
        }
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
