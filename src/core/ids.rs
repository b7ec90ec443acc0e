// Identifier generation for new recipes, pantry items and list entries
//
// Ids are short lowercase alphanumeric strings. Tests swap in the
// sequential generator so generated output is reproducible.

use rand::{distributions::Alphanumeric, Rng};

/// Length of a random id
pub const ID_LENGTH: usize = 7;

/// Source of fresh identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random 7-char ids, e.g. `k3x9q2a`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        random_id(ID_LENGTH)
    }
}

/// Predictable `<prefix>-<n>` ids, counting from 1
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

/// Lowercase alphanumeric string of the given length
pub fn random_id(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}
