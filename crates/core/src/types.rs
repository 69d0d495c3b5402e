/// All primary keys are SQLite `INTEGER PRIMARY KEY` (rowid aliases).
pub type DbId = i64;
