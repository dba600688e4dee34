use kernel::interface::database::{DatabaseConnection, Transaction, WorldState};
use kernel::KernelError;
use redis::{Client, Commands, Connection};
use tracing::debug;

use crate::database::write_set::WriteSet;
use crate::env;
use crate::error::ConvertError;

const REDIS_URL: &str = "REDIS_URL";

fn state_key(key: &str) -> String {
    format!("world_state:{key}")
}

/// World state kept in Redis under the `world_state:` namespace.
#[derive(Clone)]
pub struct RedisLedger {
    client: Client,
}

impl RedisLedger {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(REDIS_URL).convert_error()?;
        Self::open(&url)
    }

    pub fn open(url: &str) -> error_stack::Result<Self, KernelError> {
        let client = Client::open(url).convert_error()?;
        Ok(Self { client })
    }
}

impl DatabaseConnection for RedisLedger {
    type Transaction = RedisTransaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let con = self.client.get_connection().convert_error()?;
        Ok(RedisTransaction {
            con,
            writes: WriteSet::default(),
        })
    }
}

/// Reads go straight to Redis; writes are held back and sent as a single `MULTI`/`EXEC` on commit.
pub struct RedisTransaction {
    con: Connection,
    writes: WriteSet,
}

impl Transaction for RedisTransaction {
    fn commit(mut self) -> error_stack::Result<(), KernelError> {
        if self.writes.is_empty() {
            return Ok(());
        }
        debug!(writes = self.writes.len(), "committing to redis world state");
        let mut pipe = redis::pipe();
        pipe.atomic();
        for (key, value) in self.writes {
            match value {
                Some(value) => pipe.set(state_key(&key), value).ignore(),
                None => pipe.del(state_key(&key)).ignore(),
            };
        }
        pipe.query::<()>(&mut self.con).convert_error()
    }

    fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl WorldState for RedisTransaction {
    fn get_state(&mut self, key: &str) -> error_stack::Result<Option<Vec<u8>>, KernelError> {
        if let Some(pending) = self.writes.get(key) {
            return Ok(pending);
        }
        let value: Option<Vec<u8>> = self.con.get(state_key(key)).convert_error()?;
        Ok(value)
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
