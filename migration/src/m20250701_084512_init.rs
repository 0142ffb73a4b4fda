use sea_orm_migration::{prelude::{extension::postgres::TypeDropStatement, *}, sea_orm::{ActiveEnum, DbBackend, DeriveActiveEnum, EnumIter, Schema}};

use crate::util::{default_table_statement, DefaultColumn};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);

        manager
            .create_type(
                schema.create_enum_from_active_enum::<EmployeeStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<AttendanceStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<ContractType>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<ContractStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<LeaveType>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<LeaveStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<ApprovalStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<PayrollRunStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<PayslipStatus>()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Company::Table)
                .col(ColumnDef::new(Company::Code)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(Company::Name)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(Company::IsActive)
                    .boolean()
                    .not_null()
                    .default(true))
                .take()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Employee::Table)
                .col(ColumnDef::new(Employee::CompanyId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(Employee::EmployeeCode)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(Employee::FullName)
                    .text()
                    .not_null())
                .col(ColumnDef::new(Employee::Status)
                    .custom(EmployeeStatus::name())
                    .not_null())
                .col(ColumnDef::new(Employee::HireDate)
                    .date()
                    .not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Employee::Table, Employee::CompanyId)
            .to(Company::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Restrict)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_index(IndexCreateStatement::new()
            .name("idx_employee_status")
            .table(Employee::Table)
            .col(Employee::Status)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Shift::Table)
                .col(ColumnDef::new(Shift::Name)
                    .text()
                    .not_null())
                .col(ColumnDef::new(Shift::Code)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(Shift::StartTime)
                    .time()
                    .not_null())
                .col(ColumnDef::new(Shift::EndTime)
                    .time()
                    .not_null())
                .col(ColumnDef::new(Shift::IsOvernight)
                    .boolean()
                    .not_null()
                    .default(false))
                .col(ColumnDef::new(Shift::AllowedLateMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(Shift::RequiredDailyHours)
                    .decimal_len(4, 2)
                    .not_null()
                    .default(8.00))
                .col(ColumnDef::new(Shift::IsActive)
                    .boolean()
                    .not_null()
                    .default(true))
                .take()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(EmployeeShiftAssignment::Table)
                .col(ColumnDef::new(EmployeeShiftAssignment::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(EmployeeShiftAssignment::ShiftId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(EmployeeShiftAssignment::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(EmployeeShiftAssignment::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(EmployeeShiftAssignment::IsPrimary)
                    .boolean()
                    .not_null()
                    .default(false))
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(EmployeeShiftAssignment::Table, EmployeeShiftAssignment::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(EmployeeShiftAssignment::Table, EmployeeShiftAssignment::ShiftId)
            .to(Shift::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Restrict)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(AttendanceRecord::Table)
                .col(ColumnDef::new(AttendanceRecord::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(AttendanceRecord::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(AttendanceRecord::ShiftId)
                    .uuid())
                .col(ColumnDef::new(AttendanceRecord::CheckIn)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(AttendanceRecord::CheckOut)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(AttendanceRecord::Status)
                    .custom(AttendanceStatus::name())
                    .not_null())
                .col(ColumnDef::new(AttendanceRecord::TotalHours)
                    .decimal_len(5, 2)
                    .not_null())
                .col(ColumnDef::new(AttendanceRecord::LateMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(AttendanceRecord::EarlyLeaveMinutes)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(AttendanceRecord::OvertimeHours)
                    .decimal_len(5, 2)
                    .not_null())
                .col(ColumnDef::new(AttendanceRecord::IsOvertime)
                    .boolean()
                    .not_null()
                    .default(false))
                .col(ColumnDef::new(AttendanceRecord::Notes)
                    .text())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(AttendanceRecord::Table, AttendanceRecord::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(AttendanceRecord::Table, AttendanceRecord::ShiftId)
            .to(Shift::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_index(IndexCreateStatement::new()
            .name("idx_attendance_record_employee_date")
            .table(AttendanceRecord::Table)
            .col(AttendanceRecord::EmployeeId)
            .col(AttendanceRecord::Date)
            .unique()
            .take()
        ).await.unwrap();

        manager.create_index(IndexCreateStatement::new()
            .name("idx_attendance_record_date")
            .table(AttendanceRecord::Table)
            .col(AttendanceRecord::Date)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(EmployeeContract::Table)
                .col(ColumnDef::new(EmployeeContract::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(EmployeeContract::ContractType)
                    .custom(ContractType::name())
                    .not_null())
                .col(ColumnDef::new(EmployeeContract::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(EmployeeContract::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(EmployeeContract::Status)
                    .custom(ContractStatus::name())
                    .not_null())
                .col(ColumnDef::new(EmployeeContract::BaseSalary)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(EmployeeContract::Currency)
                    .text()
                    .not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(EmployeeContract::Table, EmployeeContract::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(ContractRenewLog::Table)
                .col(ColumnDef::new(ContractRenewLog::ContractId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(ContractRenewLog::RenewDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(ContractRenewLog::OldEndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(ContractRenewLog::NewEndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(ContractRenewLog::Remarks)
                    .text())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(ContractRenewLog::Table, ContractRenewLog::ContractId)
            .to(EmployeeContract::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(LeaveRequest::Table)
                .col(ColumnDef::new(LeaveRequest::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::LeaveType)
                    .custom(LeaveType::name())
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::IsHalfDay)
                    .boolean()
                    .not_null()
                    .default(false))
                .col(ColumnDef::new(LeaveRequest::Reason)
                    .text())
                .col(ColumnDef::new(LeaveRequest::Status)
                    .custom(LeaveStatus::name())
                    .not_null())
                .col(ColumnDef::new(LeaveRequest::ApproverId)
                    .uuid())
                .col(ColumnDef::new(LeaveRequest::ApprovedAt)
                    .timestamp_with_time_zone())
                .col(ColumnDef::new(LeaveRequest::CancellationReason)
                    .text())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(LeaveRequest::Table, LeaveRequest::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(LeaveRequest::Table, LeaveRequest::ApproverId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(OvertimeRequest::Table)
                .col(ColumnDef::new(OvertimeRequest::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(OvertimeRequest::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(OvertimeRequest::Hours)
                    .decimal_len(4, 2)
                    .not_null())
                .col(ColumnDef::new(OvertimeRequest::Reason)
                    .text())
                .col(ColumnDef::new(OvertimeRequest::Status)
                    .custom(ApprovalStatus::name())
                    .not_null())
                .col(ColumnDef::new(OvertimeRequest::ApproverId)
                    .uuid())
                .col(ColumnDef::new(OvertimeRequest::DecidedAt)
                    .timestamp_with_time_zone())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(OvertimeRequest::Table, OvertimeRequest::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(OvertimeRequest::Table, OvertimeRequest::ApproverId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(PayrollRun::Table)
                .col(ColumnDef::new(PayrollRun::CompanyId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PayrollRun::Name)
                    .text()
                    .not_null())
                .col(ColumnDef::new(PayrollRun::Year)
                    .integer()
                    .not_null())
                .col(ColumnDef::new(PayrollRun::Month)
                    .integer()
                    .not_null())
                .col(ColumnDef::new(PayrollRun::PeriodStart)
                    .date()
                    .not_null())
                .col(ColumnDef::new(PayrollRun::PeriodEnd)
                    .date()
                    .not_null())
                .col(ColumnDef::new(PayrollRun::Status)
                    .custom(PayrollRunStatus::name())
                    .not_null())
                .col(ColumnDef::new(PayrollRun::TotalEmployees)
                    .integer()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(PayrollRun::TotalGross)
                    .decimal_len(14, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollRun::TotalNet)
                    .decimal_len(14, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollRun::FinalizedAt)
                    .timestamp_with_time_zone())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayrollRun::Table, PayrollRun::CompanyId)
            .to(Company::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Restrict)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_index(IndexCreateStatement::new()
            .name("idx_payroll_run_company_period")
            .table(PayrollRun::Table)
            .col(PayrollRun::CompanyId)
            .col(PayrollRun::Year)
            .col(PayrollRun::Month)
            .unique()
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(PayrollItem::Table)
                .col(ColumnDef::new(PayrollItem::PayrollRunId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PayrollItem::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(PayrollItem::BasicSalary)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollItem::Allowances)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollItem::OvertimePay)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollItem::Deductions)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollItem::GrossSalary)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollItem::NetSalary)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(PayrollItem::Currency)
                    .text()
                    .not_null())
                .col(ColumnDef::new(PayrollItem::Breakdown)
                    .json_binary()
                    .not_null())
                .col(ColumnDef::new(PayrollItem::Notes)
                    .text())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayrollItem::Table, PayrollItem::PayrollRunId)
            .to(PayrollRun::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(PayrollItem::Table, PayrollItem::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Restrict)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_index(IndexCreateStatement::new()
            .name("idx_payroll_item_run_employee")
            .table(PayrollItem::Table)
            .col(PayrollItem::PayrollRunId)
            .col(PayrollItem::EmployeeId)
            .unique()
            .take()
        ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(Payslip::Table)
                .col(ColumnDef::new(Payslip::EmployeeId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(Payslip::PayrollRunId)
                    .uuid())
                .col(ColumnDef::new(Payslip::PayrollItemId)
                    .uuid())
                .col(ColumnDef::new(Payslip::Year)
                    .integer()
                    .not_null())
                .col(ColumnDef::new(Payslip::Month)
                    .integer()
                    .not_null())
                .col(ColumnDef::new(Payslip::NetAmount)
                    .decimal_len(12, 2)
                    .not_null())
                .col(ColumnDef::new(Payslip::Currency)
                    .text()
                    .not_null())
                .col(ColumnDef::new(Payslip::Status)
                    .custom(PayslipStatus::name())
                    .not_null())
                .take()
            ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Payslip::Table, Payslip::EmployeeId)
            .to(Employee::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Payslip::Table, Payslip::PayrollRunId)
            .to(PayrollRun::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(Payslip::Table, Payslip::PayrollItemId)
            .to(PayrollItem::Table, DefaultColumn::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .on_update(ForeignKeyAction::Cascade)
            .take()
        ).await.unwrap();

        manager.create_index(IndexCreateStatement::new()
            .name("idx_payslip_employee_period")
            .table(Payslip::Table)
            .col(Payslip::EmployeeId)
            .col(Payslip::Year)
            .col(Payslip::Month)
            .unique()
            .take()
        ).await.unwrap();

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(
            TableDropStatement::new()
                .table(Payslip::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(PayrollItem::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(PayrollRun::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(OvertimeRequest::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(LeaveRequest::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(ContractRenewLog::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(EmployeeContract::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(AttendanceRecord::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(EmployeeShiftAssignment::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Shift::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Employee::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Company::Table)
                .take()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(PayslipStatus::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(PayrollRunStatus::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(ApprovalStatus::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(LeaveStatus::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(LeaveType::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(ContractStatus::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(ContractType::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(AttendanceStatus::name())
                .to_owned()
        ).await.unwrap();

        manager.drop_type(
            TypeDropStatement::new()
                .name(EmployeeStatus::name())
                .to_owned()
        ).await.unwrap();

        Ok(())
    }
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "employee_status")]
enum EmployeeStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "resigned")]
    Resigned,
    #[sea_orm(string_value = "terminated")]
    Terminated,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "attendance_status")]
enum AttendanceStatus {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
    #[sea_orm(string_value = "late")]
    Late,
    #[sea_orm(string_value = "on_leave")]
    OnLeave,
    #[sea_orm(string_value = "holiday")]
    Holiday,
    #[sea_orm(string_value = "remote")]
    Remote,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "contract_type")]
enum ContractType {
    #[sea_orm(string_value = "permanent")]
    Permanent,
    #[sea_orm(string_value = "temporary")]
    Temporary,
    #[sea_orm(string_value = "internship")]
    Internship,
    #[sea_orm(string_value = "parttime")]
    Parttime,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "contract_status")]
enum ContractStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "renewed")]
    Renewed,
    #[sea_orm(string_value = "terminated")]
    Terminated,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "leave_type")]
enum LeaveType {
    #[sea_orm(string_value = "annual")]
    Annual,
    #[sea_orm(string_value = "sick")]
    Sick,
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
    #[sea_orm(string_value = "maternity")]
    Maternity,
    #[sea_orm(string_value = "emergency")]
    Emergency,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "leave_status")]
enum LeaveStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "approval_status")]
enum ApprovalStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payroll_run_status")]
enum PayrollRunStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "posted")]
    Posted,
    #[sea_orm(string_value = "paid")]
    Paid,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payslip_status")]
enum PayslipStatus {
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Iden)]
pub(crate) enum Company {
    Table,
    Code,
    Name,
    IsActive,
}

#[derive(Iden)]
pub(crate) enum Employee {
    Table,
    CompanyId,
    EmployeeCode,
    FullName,
    Status,
    HireDate,
}

#[derive(Iden)]
pub(crate) enum Shift {
    Table,
    Name,
    Code,
    StartTime,
    EndTime,
    IsOvernight,
    AllowedLateMinutes,
    RequiredDailyHours,
    IsActive,
}

#[derive(Iden)]
pub(crate) enum EmployeeShiftAssignment {
    Table,
    EmployeeId,
    ShiftId,
    StartDate,
    EndDate,
    IsPrimary,
}

#[derive(Iden)]
enum AttendanceRecord {
    Table,
    EmployeeId,
    Date,
    ShiftId,
    CheckIn,
    CheckOut,
    Status,
    TotalHours,
    LateMinutes,
    EarlyLeaveMinutes,
    OvertimeHours,
    IsOvertime,
    Notes,
}

#[derive(Iden)]
pub(crate) enum EmployeeContract {
    Table,
    EmployeeId,
    ContractType,
    StartDate,
    EndDate,
    Status,
    BaseSalary,
    Currency,
}

#[derive(Iden)]
enum ContractRenewLog {
    Table,
    ContractId,
    RenewDate,
    OldEndDate,
    NewEndDate,
    Remarks,
}

#[derive(Iden)]
enum LeaveRequest {
    Table,
    EmployeeId,
    LeaveType,
    StartDate,
    EndDate,
    IsHalfDay,
    Reason,
    Status,
    ApproverId,
    ApprovedAt,
    CancellationReason,
}

#[derive(Iden)]
enum OvertimeRequest {
    Table,
    EmployeeId,
    Date,
    Hours,
    Reason,
    Status,
    ApproverId,
    DecidedAt,
}

#[derive(Iden)]
enum PayrollRun {
    Table,
    CompanyId,
    Name,
    Year,
    Month,
    PeriodStart,
    PeriodEnd,
    Status,
    TotalEmployees,
    TotalGross,
    TotalNet,
    FinalizedAt,
}

#[derive(Iden)]
enum PayrollItem {
    Table,
    PayrollRunId,
    EmployeeId,
    BasicSalary,
    Allowances,
    OvertimePay,
    Deductions,
    GrossSalary,
    NetSalary,
    Currency,
    Breakdown,
    Notes,
}

#[derive(Iden)]
enum Payslip {
    Table,
    EmployeeId,
    PayrollRunId,
    PayrollItemId,
    Year,
    Month,
    NetAmount,
    Currency,
    Status,
}
