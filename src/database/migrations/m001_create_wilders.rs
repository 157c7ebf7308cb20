use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wilders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wilders::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wilders::Name).string())
                    .col(ColumnDef::new(Wilders::City).string())
                    .col(
                        ColumnDef::new(Wilders::Skills)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wilders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Wilders {
    Table,
    Id,
    Name,
    City,
    Skills,
}
