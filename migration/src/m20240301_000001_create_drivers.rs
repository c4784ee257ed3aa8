use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Driver::Table)
                    .col(
                        ColumnDef::new(Driver::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Driver::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Driver::Password).string().not_null())
                    .col(
                        ColumnDef::new(Driver::FirstName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Driver::LastName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Driver::Email).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Driver::LicenseNumber)
                            .string_len(255)
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Driver::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Driver::DateJoined).timestamp().not_null())
                    .col(ColumnDef::new(Driver::LastLogin).timestamp().null())
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Driver::Table)
                    .col(Driver::DateJoined)
                    .name("idx_drivers_date_joined")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Driver::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    #[sea_orm(iden = "drivers")]
    Table,
    Id,
    Username,
    Password,
    FirstName,
    LastName,
    Email,
    LicenseNumber,
    IsActive,
    DateJoined,
    LastLogin,
}
