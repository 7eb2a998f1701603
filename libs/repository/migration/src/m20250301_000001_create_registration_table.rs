use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registration::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Registration::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registration::Email)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registration::Password)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registration::DateOfRegistration)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Registration::Code)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    Name,
    Email,
    Password,
    DateOfRegistration,
    Code,
}
