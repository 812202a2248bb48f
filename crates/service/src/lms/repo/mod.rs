pub mod seaorm;

pub use seaorm::SeaOrmLmsStore;
