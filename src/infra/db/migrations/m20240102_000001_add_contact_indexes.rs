//! Migration: Index contact names and child foreign keys.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contact list is ordered by first name
        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_first_name")
                    .table(Contacts::Table)
                    .col(Contacts::FirstName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_email_addresses_contact_id")
                    .table(EmailAddresses::Table)
                    .col(EmailAddresses::ContactId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_contact_id")
                    .table(Addresses::Table)
                    .col(Addresses::ContactId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_addresses_contact_id")
                    .table(Addresses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_email_addresses_contact_id")
                    .table(EmailAddresses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_contacts_first_name")
                    .table(Contacts::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Contacts {
    Table,
    FirstName,
}

#[derive(Iden)]
enum EmailAddresses {
    Table,
    ContactId,
}

#[derive(Iden)]
enum Addresses {
    Table,
    ContactId,
}
