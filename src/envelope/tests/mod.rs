mod mutation_tests;
mod ordering_tests;
mod format_tests;
