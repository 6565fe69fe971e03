mod invariants;
mod matcher;
