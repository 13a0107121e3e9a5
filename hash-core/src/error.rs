/// Error type for epilogue construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The trailing bytes do not fit into the two-block epilogue.
    #[error("tail of {len} bytes exceeds epilogue capacity of {max} bytes")]
    TailTooLong {
        /// Length of the rejected tail.
        len: usize,
        /// Largest tail the epilogue accepts.
        max: usize,
    },
}
