pub mod users_table;
