// Unit-level property tests for Either
