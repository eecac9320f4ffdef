use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Classes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课表条目表（通过 ten_lop 字符串关联班级，不设外键）
        manager
            .create_table(
                Table::create()
                    .table(TimetableEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimetableEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimetableEntries::TenLop).string().not_null())
                    .col(ColumnDef::new(TimetableEntries::Buoi).string().null())
                    .col(
                        ColumnDef::new(TimetableEntries::NgayHoc)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimetableEntries::GiangDuong).string().null())
                    .col(ColumnDef::new(TimetableEntries::DiaDiem).string().null())
                    .col(ColumnDef::new(TimetableEntries::DoiTuong).string().null())
                    .col(ColumnDef::new(TimetableEntries::MonHoc).string().null())
                    .col(ColumnDef::new(TimetableEntries::LoaiGio).string().null())
                    .col(ColumnDef::new(TimetableEntries::SoTiet).integer().null())
                    .col(ColumnDef::new(TimetableEntries::GiangVien).string().null())
                    .col(ColumnDef::new(TimetableEntries::SdtGv).string().null())
                    .col(ColumnDef::new(TimetableEntries::NoiDung).text().null())
                    .col(ColumnDef::new(TimetableEntries::GioThi).string().null())
                    .col(ColumnDef::new(TimetableEntries::GhiChu).text().null())
                    .col(
                        ColumnDef::new(TimetableEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimetableEntries::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::ClassName).string().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Content).text().not_null())
                    .col(ColumnDef::new(Announcements::Location).string().not_null())
                    .col(ColumnDef::new(Announcements::CourseId).big_integer().null())
                    .col(
                        ColumnDef::new(Announcements::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Announcements::ExpiresAt).big_integer().null())
                    .col(
                        ColumnDef::new(Announcements::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Announcements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 索引 ====================

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetable_entries_ten_lop")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::TenLop)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_timetable_entries_ten_lop_ngay_hoc")
                    .table(TimetableEntries::Table)
                    .col(TimetableEntries::TenLop)
                    .col(TimetableEntries::NgayHoc)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_class_name")
                    .table(Students::Table)
                    .col(Students::ClassName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_location")
                    .table(Announcements::Table)
                    .col(Announcements::Location)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_expires_at")
                    .table(Announcements::Table)
                    .col(Announcements::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimetableEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TimetableEntries {
    #[sea_orm(iden = "timetable_entries")]
    Table,
    Id,
    TenLop,
    Buoi,
    NgayHoc,
    GiangDuong,
    DiaDiem,
    DoiTuong,
    MonHoc,
    LoaiGio,
    SoTiet,
    GiangVien,
    SdtGv,
    NoiDung,
    GioThi,
    GhiChu,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    StudentCode,
    FullName,
    Email,
    Phone,
    ClassName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Content,
    Location,
    CourseId,
    IsActive,
    ExpiresAt,
    Priority,
    CreatedAt,
    UpdatedAt,
}
