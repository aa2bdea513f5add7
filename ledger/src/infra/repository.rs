mod transaction;

pub use transaction::PgTransactionRepository;
