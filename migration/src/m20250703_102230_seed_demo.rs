use sea_orm_migration::prelude::*;

use crate::m20250701_084512_init::{Company, Employee, EmployeeContract, EmployeeShiftAssignment, Shift};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let time = Expr::val("2025-07-03T10:22:30.000Z").cast_as("timestamptz");

        // One demo company
        manager
            .exec_stmt(Query::insert()
                .into_table(Company::Table)
                .columns(["id", "created_at", "updated_at", "code", "name", "is_active"])
                .values_panic([Expr::val(format!("{:032x}", 0xC0 as u128)).cast_as("uuid"), time.clone(), time.clone(), "ACME".into(), "Acme Corporation".into(), true.into()])
                .to_owned()
        ).await.unwrap();

        // A day shift and an overnight shift
        for (id, name, code, start, end, overnight) in [
            (0xA1, "Day Shift", "DAY", "09:00:00", "18:00:00", false),
            (0xA2, "Night Shift", "NIGHT", "22:00:00", "06:00:00", true),
        ] {
            manager
                .exec_stmt(Query::insert()
                    .into_table(Shift::Table)
                    .columns(["id", "created_at", "updated_at", "name", "code", "start_time", "end_time", "is_overnight", "allowed_late_minutes", "required_daily_hours", "is_active"])
                    .values_panic([Expr::val(format!("{:032x}", id as u128)).cast_as("uuid"), time.clone(), time.clone(), name.into(), code.into(), Expr::val(start).cast_as("time"), Expr::val(end).cast_as("time"), overnight.into(), 15.into(), Expr::val("8.00").cast_as("numeric"), true.into()])
                    .to_owned()
            ).await.unwrap();
        }

        // Ten employees on active yearly contracts, the first five on the
        // day shift and the rest on the night shift
        for i in 1..=10 {
            let uuid = format!("{:032x}", i as u128);
            let employee_code = format!("EMP-{i:03}");
            let full_name = format!("Employee {i}");
            let salary = rand::random_range(3_000..=9_000);
            let shift = if i <= 5 { 0xA1 } else { 0xA2 };

            manager
                .exec_stmt(Query::insert()
                    .into_table(Employee::Table)
                    .columns(["id", "created_at", "updated_at", "company_id", "employee_code", "full_name", "status", "hire_date"])
                    .values_panic([Expr::val(uuid.clone()).cast_as("uuid"), time.clone(), time.clone(), Expr::val(format!("{:032x}", 0xC0 as u128)).cast_as("uuid"), employee_code.into(), full_name.into(), Expr::val("active").cast_as("employee_status"), Expr::val("2025-01-01").cast_as("date")])
                    .to_owned()
            ).await.unwrap();

            manager
                .exec_stmt(Query::insert()
                    .into_table(EmployeeContract::Table)
                    .columns(["id", "created_at", "updated_at", "employee_id", "contract_type", "start_date", "end_date", "status", "base_salary", "currency"])
                    .values_panic([Expr::val(format!("{:032x}", 0xB00 + i as u128)).cast_as("uuid"), time.clone(), time.clone(), Expr::val(uuid.clone()).cast_as("uuid"), Expr::val("permanent").cast_as("contract_type"), Expr::val("2025-01-01").cast_as("date"), Expr::val("2025-12-31").cast_as("date"), Expr::val("active").cast_as("contract_status"), Expr::val(format!("{salary}.00")).cast_as("numeric"), "USD".into()])
                    .to_owned()
            ).await.unwrap();

            manager
                .exec_stmt(Query::insert()
                    .into_table(EmployeeShiftAssignment::Table)
                    .columns(["id", "created_at", "updated_at", "employee_id", "shift_id", "start_date", "end_date", "is_primary"])
                    .values_panic([Expr::val(format!("{:032x}", 0xD00 + i as u128)).cast_as("uuid"), time.clone(), time.clone(), Expr::val(uuid).cast_as("uuid"), Expr::val(format!("{:032x}", shift as u128)).cast_as("uuid"), Expr::val("2025-01-01").cast_as("date"), Expr::val("2025-12-31").cast_as("date"), true.into()])
                    .to_owned()
            ).await.unwrap();
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for i in 1..=10 {
            manager
                .exec_stmt(Query::delete()
                    .from_table(EmployeeShiftAssignment::Table)
                    .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", 0xD00 + i as u128)).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();

            manager
                .exec_stmt(Query::delete()
                    .from_table(EmployeeContract::Table)
                    .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", 0xB00 + i as u128)).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();

            manager
                .exec_stmt(Query::delete()
                    .from_table(Employee::Table)
                    .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", i as u128)).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();
        }

        for id in [0xA1, 0xA2] {
            manager
                .exec_stmt(Query::delete()
                    .from_table(Shift::Table)
                    .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", id as u128)).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();
        }

        manager
            .exec_stmt(Query::delete()
                .from_table(Company::Table)
                .and_where(Expr::col("id").eq(Expr::val(format!("{:032x}", 0xC0 as u128)).cast_as("uuid")))
                .to_owned()
        ).await.unwrap();

        Ok(())
    }
}
