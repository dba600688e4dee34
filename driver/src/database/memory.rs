use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction, WorldState};
use kernel::KernelError;
use tracing::debug;

use crate::database::write_set::WriteSet;

type State = HashMap<String, Vec<u8>>;

fn poisoned() -> Report<KernelError> {
    Report::new(KernelError::Store).attach_printable("world state lock is poisoned")
}

/// Process-local world state. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<RwLock<State>>,
}

impl DatabaseConnection for InMemoryLedger {
    type Transaction = InMemoryTransaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction {
            state: Arc::clone(&self.state),
            writes: WriteSet::default(),
        })
    }
}

pub struct InMemoryTransaction {
    state: Arc<RwLock<State>>,
    writes: WriteSet,
}

impl Transaction for InMemoryTransaction {
    fn commit(self) -> error_stack::Result<(), KernelError> {
        if self.writes.is_empty() {
            return Ok(());
        }
        let mut state = self.state.write().map_err(|_| poisoned())?;
        debug!(writes = self.writes.len(), "committing to in-memory world state");
        for (key, value) in self.writes {
            match value {
                Some(value) => {
                    state.insert(key, value);
                }
                None => {
                    state.remove(&key);
                }
            }
        }
        Ok(())
    }

    fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl WorldState for InMemoryTransaction {
    fn get_state(&mut self, key: &str) -> error_stack::Result<Option<Vec<u8>>, KernelError> {
        if let Some(pending) = self.writes.get(key) {
            return Ok(pending);
        }
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> error_stack::Result<(), KernelError> {
        self.writes.put(key, value);
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> error_stack::Result<(), KernelError> {
        self.writes.delete(key);
        Ok(())
    }
}
