//! Migration: Create contacts, email_addresses and addresses tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Contacts::Title).string_len(100).null())
                    .col(ColumnDef::new(Contacts::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Contacts::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Contacts::DateOfBirth).date().null())
                    .col(ColumnDef::new(Contacts::PrimaryEmail).string().null())
                    .col(
                        ColumnDef::new(Contacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contacts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmailAddresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmailAddresses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmailAddresses::ContactId).uuid().not_null())
                    .col(ColumnDef::new(EmailAddresses::EmailType).string().not_null())
                    .col(ColumnDef::new(EmailAddresses::Email).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_email_addresses_contact_id")
                            .from(EmailAddresses::Table, EmailAddresses::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Addresses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Addresses::ContactId).uuid().not_null())
                    .col(ColumnDef::new(Addresses::Street1).string().not_null())
                    .col(ColumnDef::new(Addresses::Street2).string().null())
                    .col(ColumnDef::new(Addresses::City).string().not_null())
                    .col(ColumnDef::new(Addresses::State).string().not_null())
                    .col(ColumnDef::new(Addresses::Zip).string().not_null())
                    .col(ColumnDef::new(Addresses::AddressType).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_contact_id")
                            .from(Addresses::Table, Addresses::ContactId)
                            .to(Contacts::Table, Contacts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmailAddresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    Title,
    FirstName,
    LastName,
    DateOfBirth,
    PrimaryEmail,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum EmailAddresses {
    Table,
    Id,
    ContactId,
    EmailType,
    Email,
}

#[derive(Iden)]
enum Addresses {
    Table,
    Id,
    ContactId,
    Street1,
    Street2,
    City,
    State,
    Zip,
    AddressType,
}
