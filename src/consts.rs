pub mod cli_consts {
    //! CLI Constants
    //!
    //! Defaults and fixed values shared by the evaluator and the command line.

    // =============================================================================
    // EVALUATION
    // =============================================================================

    /// The n evaluated when no argument is given.
    pub const DEFAULT_N: i64 = 5;

    /// Last index seeded directly as G(i) = i. Every later term comes from the
    /// completion step.
    pub const SEED_LIMIT: i64 = 3;

    /// Reference table G(1..=5).
    pub const KNOWN_VALUES: [(i64, u64); 5] = [(1, 1), (2, 2), (3, 3), (4, 10), (5, 22)];

    // =============================================================================
    // CONFIGURATION FILE
    // =============================================================================

    /// Directory under the user's home holding the config file.
    pub const CONFIG_DIR: &str = ".g-iter";

    /// Config file name inside `CONFIG_DIR`.
    pub const CONFIG_FILE: &str = "config.json";
}
