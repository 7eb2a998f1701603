use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_registration_table::Registration;
use crate::m20250301_000002_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meetup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Meetup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Meetup::RegistrationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Meetup::EventId).integer().not_null())
                    .col(ColumnDef::new(Meetup::EnrolledAt).date().not_null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_registration_id")
                            .from(Meetup::Table, Meetup::RegistrationId)
                            .to(Registration::Table, Registration::Id),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_event_id")
                            .from(Meetup::Table, Meetup::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Meetup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Meetup {
    Table,
    Id,
    RegistrationId,
    EventId,
    EnrolledAt,
}
