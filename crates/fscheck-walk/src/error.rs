use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("unable to start {program}")]
    Start {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to read output of {program}")]
    Read {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
    #[error("unable to walk {root}")]
    Walk {
        root: String,
        #[source]
        source: walkdir::Error,
    },
    #[error("unable to compile walk predicates")]
    Pattern(#[from] fscheck_domain::PatternError),
}
