use application::service::{
    CreateTextbookService, DeleteTextbookService, ExistsTextbookService, GetTextbookService,
    UpdateTextbookService,
};
use application::transfer::{
    CreateTextbookDto, DeleteTextbookDto, GetTextbookDto, TextbookDto, UpdateTextbookDto,
};
use driver::database::InMemoryLedger;
use driver::module::ContractModule;
use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, Transaction, WorldState};
use kernel::interface::identity::ClientIdentity;
use kernel::prelude::entity::MspId;
use kernel::prelude::policy::RoleRegistry;
use kernel::KernelError;

const MANUFACTURER: &str = "manufacturer-textbook-com";
const DEALER: &str = "dealer-textbook-com";
const STRANGER: &str = "retailer-textbook-com";

fn module() -> (ContractModule<InMemoryLedger>, InMemoryLedger) {
    let ledger = InMemoryLedger::default();
    let module = ContractModule::new(ledger.clone(), RoleRegistry::default());
    (module, ledger)
}

fn caller(msp_id: &str) -> MspId {
    MspId::new(msp_id)
}

fn get(id: &str) -> GetTextbookDto {
    GetTextbookDto { id: id.to_string() }
}

fn create_dto(id: &str, title: &str, author: &str, year: &str, price: &str) -> CreateTextbookDto {
    CreateTextbookDto {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
        price: price.to_string(),
    }
}

fn update_dto(id: &str, title: &str, author: &str, year: &str, price: &str) -> UpdateTextbookDto {
    UpdateTextbookDto {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
        price: price.to_string(),
    }
}

fn delete_dto(id: &str) -> DeleteTextbookDto {
    DeleteTextbookDto { id: id.to_string() }
}

fn raw(ledger: &InMemoryLedger, key: &str) -> Option<Vec<u8>> {
    let mut con = ledger.transact().expect("transaction");
    con.get_state(key).expect("readable")
}

fn seed(module: &ContractModule<InMemoryLedger>) {
    module
        .create_textbook(
            &caller(MANUFACTURER),
            create_dto("b1", "Intro", "Alice", "2023", "50"),
        )
        .expect("manufacturer creates");
}

fn assert_context<T: std::fmt::Debug>(
    result: error_stack::Result<T, KernelError>,
    expected: KernelError,
) {
    let report = result.unwrap_err();
    assert_eq!(report.current_context(), &expected, "{report:?}");
}

#[test]
fn unknown_key_does_not_exist() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();
    assert!(!module.textbook_exists(&get("never-created"))?);
    Ok(())
}

#[test]
fn manufacturer_creates() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();
    let message = module.create_textbook(
        &caller(MANUFACTURER),
        create_dto("b1", "T", "A", "2024", "10"),
    )?;
    assert!(message.contains("b1"));
    assert!(module.textbook_exists(&get("b1"))?);
    Ok(())
}

#[test]
fn others_cannot_create() {
    for msp_id in [DEALER, STRANGER, ""] {
        let (module, ledger) = module();
        assert_context(
            module.create_textbook(&caller(msp_id), create_dto("b1", "T", "A", "2024", "10")),
            KernelError::Unauthorized,
        );
        assert_eq!(raw(&ledger, "b1"), None);
    }
}

#[test]
fn unauthorized_create_hides_existence() {
    let (module, _) = module();
    seed(&module);

    // Same answer whether or not the key is taken.
    assert_context(
        module.create_textbook(&caller(DEALER), create_dto("b1", "T", "A", "2024", "10")),
        KernelError::Unauthorized,
    );
    assert_context(
        module.create_textbook(&caller(DEALER), create_dto("b2", "T", "A", "2024", "10")),
        KernelError::Unauthorized,
    );
}

#[test]
fn duplicate_create_keeps_first_payload() {
    let (module, ledger) = module();
    seed(&module);
    let before = raw(&ledger, "b1");

    assert_context(
        module.create_textbook(
            &caller(MANUFACTURER),
            create_dto("b1", "Other", "Bob", "1999", "1"),
        ),
        KernelError::AlreadyExists,
    );
    assert_eq!(raw(&ledger, "b1"), before);
}

#[test]
fn read_unknown_key_is_not_found() {
    let (module, _) = module();
    assert_context(module.get_textbook(&get("b1")), KernelError::NotFound);
}

#[test]
fn read_returns_created_fields() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();
    module.create_textbook(
        &caller(MANUFACTURER),
        create_dto("b1", "T", "A", "2024", "10"),
    )?;

    let found = module.get_textbook(&get("b1"))?;
    assert_eq!(
        found,
        TextbookDto {
            id: "b1".to_string(),
            title: "T".to_string(),
            author: "A".to_string(),
            year: "2024".to_string(),
            price: "10".to_string(),
        }
    );
    Ok(())
}

#[test]
fn read_of_corrupted_payload_is_serialization_error() -> error_stack::Result<(), KernelError> {
    let (module, ledger) = module();
    let mut con = ledger.transact()?;
    con.put_state("b1", b"\x00\x01garbage".to_vec())?;
    con.commit()?;

    assert!(module.textbook_exists(&get("b1"))?);
    assert_context(module.get_textbook(&get("b1")), KernelError::Serialization);
    Ok(())
}

#[test]
fn dealer_updates_price_only() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();
    seed(&module);
    let before = module.get_textbook(&get("b1"))?;

    module.update_textbook(
        &caller(DEALER),
        update_dto("b1", "Hijacked", "Mallory", "1970", "55"),
    )?;

    let after = module.get_textbook(&get("b1"))?;
    assert_eq!(
        after,
        TextbookDto {
            price: "55".to_string(),
            ..before
        }
    );
    Ok(())
}

#[test]
fn manufacturer_updates_every_mutable_field() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();
    seed(&module);

    let message = module.update_textbook(
        &caller(MANUFACTURER),
        update_dto("b1", "Advanced", "Bob", "2024", "70"),
    )?;
    assert!(message.contains("b1"));

    let after = module.get_textbook(&get("b1"))?;
    assert_eq!(
        after,
        TextbookDto {
            id: "b1".to_string(),
            title: "Advanced".to_string(),
            author: "Bob".to_string(),
            year: "2024".to_string(),
            price: "70".to_string(),
        }
    );
    Ok(())
}

#[test]
fn stranger_update_leaves_bytes_untouched() {
    let (module, ledger) = module();
    seed(&module);
    let before = raw(&ledger, "b1");

    assert_context(
        module.update_textbook(&caller(STRANGER), update_dto("b1", "X", "Y", "Z", "0")),
        KernelError::Unauthorized,
    );
    assert_eq!(raw(&ledger, "b1"), before);
}

#[test]
fn update_checks_existence_before_role() {
    let (module, _) = module();
    assert_context(
        module.update_textbook(&caller(STRANGER), update_dto("b1", "X", "Y", "Z", "0")),
        KernelError::NotFound,
    );
    assert_context(
        module.update_textbook(&caller(DEALER), update_dto("b1", "X", "Y", "Z", "0")),
        KernelError::NotFound,
    );
}

#[test]
fn manufacturer_deletes() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();
    seed(&module);

    let message = module.delete_textbook(&caller(MANUFACTURER), delete_dto("b1"))?;
    assert!(message.contains("b1"));
    assert!(!module.textbook_exists(&get("b1"))?);
    Ok(())
}

#[test]
fn dealer_cannot_delete() {
    let (module, ledger) = module();
    seed(&module);
    let before = raw(&ledger, "b1");

    assert_context(
        module.delete_textbook(&caller(DEALER), delete_dto("b1")),
        KernelError::Unauthorized,
    );
    assert_eq!(raw(&ledger, "b1"), before);
}

#[test]
fn delete_of_unknown_key_is_not_found() {
    let (module, _) = module();
    assert_context(
        module.delete_textbook(&caller(MANUFACTURER), delete_dto("b1")),
        KernelError::NotFound,
    );
}

#[test]
fn unauthorized_delete_hides_existence() {
    let (module, _) = module();
    assert_context(
        module.delete_textbook(&caller(STRANGER), delete_dto("missing")),
        KernelError::Unauthorized,
    );
}

#[test]
fn configured_organizations_replace_defaults() -> error_stack::Result<(), KernelError> {
    let ledger = InMemoryLedger::default();
    let roles = RoleRegistry::new(MspId::new("PublisherMSP"), MspId::new("ShopMSP"))?;
    let module = ContractModule::new(ledger, roles);

    assert_context(
        module.create_textbook(
            &caller(MANUFACTURER),
            create_dto("b1", "T", "A", "2024", "10"),
        ),
        KernelError::Unauthorized,
    );
    module.create_textbook(
        &caller("PublisherMSP"),
        create_dto("b1", "T", "A", "2024", "10"),
    )?;
    module.update_textbook(&caller("ShopMSP"), update_dto("b1", "X", "Y", "Z", "11"))?;
    assert_eq!(module.get_textbook(&get("b1"))?.price, "11");
    Ok(())
}

struct Anonymous;

impl ClientIdentity for Anonymous {
    fn msp_id(&self) -> error_stack::Result<MspId, KernelError> {
        Err(Report::new(KernelError::Identity).attach_printable("no certificate presented"))
    }
}

#[test]
fn identity_failure_propagates() {
    let (module, ledger) = module();
    seed(&module);
    let before = raw(&ledger, "b2");

    assert_context(
        module.create_textbook(&Anonymous, create_dto("b2", "T", "A", "2024", "10")),
        KernelError::Identity,
    );
    assert_context(
        module.update_textbook(&Anonymous, update_dto("b1", "X", "Y", "Z", "0")),
        KernelError::Identity,
    );
    assert_context(
        module.delete_textbook(&Anonymous, delete_dto("b1")),
        KernelError::Identity,
    );
    assert_eq!(raw(&ledger, "b2"), before);
}

#[test]
fn lifecycle() -> error_stack::Result<(), KernelError> {
    let (module, _) = module();

    module.create_textbook(
        &caller(MANUFACTURER),
        create_dto("b1", "Intro", "Alice", "2023", "50"),
    )?;
    module.update_textbook(
        &caller(DEALER),
        update_dto("b1", "Intro", "Alice", "2023", "55"),
    )?;
    assert_eq!(
        module.get_textbook(&get("b1"))?,
        TextbookDto {
            id: "b1".to_string(),
            title: "Intro".to_string(),
            author: "Alice".to_string(),
            year: "2023".to_string(),
            price: "55".to_string(),
        }
    );
    module.delete_textbook(&caller(MANUFACTURER), delete_dto("b1"))?;
    assert_context(module.get_textbook(&get("b1")), KernelError::NotFound);
    Ok(())
}

/// World state whose every read fails.
struct UnreachableLedger;

struct UnreachableTransaction;

impl DatabaseConnection for UnreachableLedger {
    type Transaction = UnreachableTransaction;
    fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(UnreachableTransaction)
    }
}

impl Transaction for UnreachableTransaction {
    fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

impl WorldState for UnreachableTransaction {
    fn get_state(&mut self, _key: &str) -> error_stack::Result<Option<Vec<u8>>, KernelError> {
        Err(Report::new(KernelError::Store).attach_printable("peer unreachable"))
    }

    fn put_state(&mut self, _key: &str, _value: Vec<u8>) -> error_stack::Result<(), KernelError> {
        Err(Report::new(KernelError::Store).attach_printable("peer unreachable"))
    }

    fn del_state(&mut self, _key: &str) -> error_stack::Result<(), KernelError> {
        Err(Report::new(KernelError::Store).attach_printable("peer unreachable"))
    }
}

#[test]
fn store_failure_propagates() {
    let module = ContractModule::new(UnreachableLedger, RoleRegistry::default());

    assert_context(module.textbook_exists(&get("b1")), KernelError::Store);
    assert_context(module.get_textbook(&get("b1")), KernelError::Store);
    assert_context(
        module.create_textbook(
            &caller(MANUFACTURER),
            create_dto("b1", "T", "A", "2024", "10"),
        ),
        KernelError::Store,
    );
    assert_context(
        module.update_textbook(&caller(DEALER), update_dto("b1", "X", "Y", "Z", "0")),
        KernelError::Store,
    );
    assert_context(
        module.delete_textbook(&caller(MANUFACTURER), delete_dto("b1")),
        KernelError::Store,
    );
}
