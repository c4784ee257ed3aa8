use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_drivers::Driver;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Token::Table)
                    .col(ColumnDef::new(Token::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Token::DriverId).integer().not_null())
                    .col(
                        ColumnDef::new(Token::Visits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Token::ExpiredAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tokens_driver_id")
                            .from(Token::Table, Token::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Token::Table)
                    .col(Token::DriverId)
                    .name("idx_tokens_driver_id")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Token::Table)
                    .col(Token::ExpiredAt)
                    .name("idx_tokens_expired_at")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Token::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Token {
    #[sea_orm(iden = "tokens")]
    Table,
    Id,
    DriverId,
    Visits,
    ExpiredAt,
}
