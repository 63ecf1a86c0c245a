pub mod a025_sales_record;
