use anyhow::{Context, Result};

use ams_client::views;

use crate::cli_commands::{AssetCommands, CategoryCommands, EmployeeCommands};

use super::{Ctx, api, parse_data, print_body, print_json, view};

pub(super) fn handle_employee_command(ctx: &Ctx, command: EmployeeCommands) -> Result<()> {
    ctx.require_admin()?;
    let client = &ctx.client;
    let response = match command {
        EmployeeCommands::List => api(client.get_all_employees(), "Failed to load employees")?,
        EmployeeCommands::Get { id } => {
            api(client.get_employee_by_id(id), "Failed to load employee")?
        }
        EmployeeCommands::Create { data } => api(
            client.register_employee(&parse_data(&data)?),
            "Failed to create employee",
        )?,
        EmployeeCommands::Update { id, data } => api(
            client.update_employee(id, &parse_data(&data)?),
            "Failed to update employee",
        )?,
        EmployeeCommands::Delete { id } => {
            api(client.delete_employee(id), "Failed to delete employee")?
        }
    };
    print_body(&response)
}

pub(super) fn handle_category_command(ctx: &Ctx, command: CategoryCommands) -> Result<()> {
    let client = &ctx.client;
    let response = match command {
        CategoryCommands::List => {
            ctx.require_session()?;
            api(client.get_all_asset_categories(), "Failed to load categories")?
        }
        CategoryCommands::Get { id } => {
            ctx.require_session()?;
            api(client.get_asset_category_by_id(id), "Failed to load category")?
        }
        CategoryCommands::ByName { name } => {
            ctx.require_session()?;
            api(
                client.get_asset_category_by_name(&name),
                "Failed to load category",
            )?
        }
        CategoryCommands::Add { data } => {
            ctx.require_admin()?;
            api(
                client.add_asset_category(&parse_data(&data)?),
                "Failed to add category",
            )?
        }
        CategoryCommands::Update { id, data } => {
            ctx.require_admin()?;
            api(
                client.update_asset_category(id, &parse_data(&data)?),
                "Failed to update category",
            )?
        }
        CategoryCommands::Delete { id } => {
            ctx.require_admin()?;
            api(client.delete_asset_category(id), "Failed to delete category")?
        }
    };
    print_body(&response)
}

pub(super) fn handle_asset_command(ctx: &Ctx, command: AssetCommands) -> Result<()> {
    let client = &ctx.client;
    let response = match command {
        AssetCommands::List => {
            ctx.require_session()?;
            api(client.get_all_assets(), "Failed to load assets")?
        }
        AssetCommands::Get { id } => {
            ctx.require_session()?;
            api(client.get_asset_by_id(id), "Failed to load asset")?
        }
        AssetCommands::ByCategory { name } => {
            ctx.require_session()?;
            api(client.get_assets_by_category(&name), "Failed to load assets")?
        }
        AssetCommands::ByEmployee { employee_id } => {
            ctx.require_admin()?;
            api(
                client.get_assets_by_employee(employee_id),
                "Failed to load assets",
            )?
        }
        AssetCommands::Mine => {
            ctx.require_session()?;
            let assets = view(
                views::my_assigned_assets(client, &ctx.session),
                "Failed to load your assets",
            )?;
            return print_json(&assets);
        }
        AssetCommands::Add { data } => {
            ctx.require_admin()?;
            api(client.add_asset(&parse_data(&data)?), "Failed to add asset")?
        }
        AssetCommands::Update { id, data } => {
            ctx.require_admin()?;
            api(
                client.update_asset(id, &parse_data(&data)?),
                "Failed to update asset",
            )?
        }
        AssetCommands::Delete { id } => {
            ctx.require_admin()?;
            api(client.delete_asset(id), "Failed to delete asset")?
        }
        AssetCommands::UploadImage { id, file } => {
            ctx.require_admin()?;
            let bytes =
                std::fs::read(&file).with_context(|| format!("read {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            api(
                client.upload_asset_image(id, &file_name, bytes),
                "Failed to upload image",
            )?
        }
    };
    print_body(&response)
}
