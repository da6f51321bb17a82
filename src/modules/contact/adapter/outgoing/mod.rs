mod contact_message_repository_postgrest;

pub use contact_message_repository_postgrest::ContactMessageRepositoryPostgrest;
