//! Error handling and exit codes.

use arenavec_core::AllocError;

/// Exit codes returned by the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The arena ran out of room.
    pub const ERROR_OUT_OF_MEMORY: i32 = 3;
    /// The arena's buffer could not be obtained.
    pub const ERROR_ALLOCATION_FAILURE: i32 = 4;
}

/// Map an allocation error to the process exit code.
pub fn handle_error(err: &AllocError) -> i32 {
    match err {
        AllocError::OutOfMemory { .. } => exit_codes::ERROR_OUT_OF_MEMORY,
        AllocError::AllocationFailure { .. } => exit_codes::ERROR_ALLOCATION_FAILURE,
    }
}

/// Map any application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AllocError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let oom = AllocError::OutOfMemory {
            requested: 8,
            available: 0,
        };
        assert_eq!(handle_error(&oom), 3);
        assert_eq!(handle_error(&AllocError::AllocationFailure { bytes: 1 }), 4);
    }

    #[test]
    fn anyhow_errors_are_downcast() {
        let err = anyhow::Error::new(AllocError::overflow(0));
        assert_eq!(exit_code(&err), exit_codes::ERROR_OUT_OF_MEMORY);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }
}
