use anyhow::Result;

use ams_client::model::{
    AuditDecisionRequest, AuditStatus, BorrowRequest, BorrowingActionRequest, BorrowingStatus,
    ServiceRequestCreate,
};
use ams_client::views::{self, StatusCounts};

use crate::cli_commands::{AuditCommands, BorrowingCommands, ServiceRequestCommands};

use super::{Ctx, api, print_body, print_json, view};

pub(super) fn handle_borrowing_command(ctx: &Ctx, command: BorrowingCommands) -> Result<()> {
    let client = &ctx.client;
    let response = match command {
        BorrowingCommands::Mine {
            status,
            held,
            counts,
        } => {
            ctx.require_session()?;
            let status = status
                .as_deref()
                .map(str::parse::<BorrowingStatus>)
                .transpose()?;
            let all = if held {
                view(views::my_assets(client, &ctx.session), "Failed to load your assets")?
            } else {
                view(
                    views::my_borrowings(client, &ctx.session),
                    "Failed to load your borrowings",
                )?
            };
            if counts {
                let tally = StatusCounts::tally(&all);
                let mut out = serde_json::Map::new();
                out.insert("ALL".to_string(), tally.all.into());
                for st in BorrowingStatus::ALL {
                    out.insert(st.as_str().to_string(), tally.get(st).into());
                }
                return print_json(&out);
            }
            return print_json(&views::filter_by_status(&all, status));
        }
        BorrowingCommands::Active => {
            ctx.require_admin()?;
            api(client.get_active_borrowings(), "Failed to load borrowings")?
        }
        BorrowingCommands::Pending => {
            ctx.require_admin()?;
            api(client.get_pending_borrowings(), "Failed to load borrowings")?
        }
        BorrowingCommands::Rejected => {
            ctx.require_admin()?;
            api(client.get_rejected_borrowings(), "Failed to load borrowings")?
        }
        BorrowingCommands::Returned => {
            ctx.require_admin()?;
            api(client.get_returned_borrowings(), "Failed to load borrowings")?
        }
        BorrowingCommands::ByEmployee { employee_id } => {
            ctx.require_admin()?;
            api(
                client.get_borrowings_by_employee(employee_id),
                "Failed to load borrowings",
            )?
        }
        BorrowingCommands::Request { asset_id } => {
            ctx.require_session()?;
            let request = BorrowRequest {
                employee_id: ctx.employee_id()?,
                asset_id,
            };
            api(client.request_borrowing(&request), "Failed to request asset")?
        }
        BorrowingCommands::Action { id, action } => {
            ctx.require_admin()?;
            api(
                client.update_borrowing_action(id, &BorrowingActionRequest { action }),
                "Failed to update borrowing",
            )?
        }
        BorrowingCommands::Return { id } => {
            ctx.require_session()?;
            api(client.return_borrowing(id), "Failed to return asset")?
        }
    };
    print_body(&response)
}

pub(super) fn handle_service_request_command(
    ctx: &Ctx,
    command: ServiceRequestCommands,
) -> Result<()> {
    let client = &ctx.client;
    let response = match command {
        ServiceRequestCommands::List => {
            ctx.require_admin()?;
            api(
                client.get_all_service_requests(),
                "Failed to load service requests",
            )?
        }
        ServiceRequestCommands::Get { id } => {
            ctx.require_session()?;
            api(
                client.get_service_request_by_id(id),
                "Failed to load service request",
            )?
        }
        ServiceRequestCommands::Mine => {
            ctx.require_session()?;
            let mine = view(
                views::my_service_requests(client, &ctx.session),
                "Failed to load your service requests",
            )?;
            return print_json(&mine);
        }
        ServiceRequestCommands::ByEmployee { employee_id } => {
            ctx.require_admin()?;
            api(
                client.get_service_requests_by_employee(employee_id),
                "Failed to load service requests",
            )?
        }
        ServiceRequestCommands::ByStatus { status } => {
            ctx.require_admin()?;
            api(
                client.get_service_requests_by_status(&status),
                "Failed to load service requests",
            )?
        }
        ServiceRequestCommands::Create {
            asset_id,
            issue_type,
            description,
        } => {
            ctx.require_session()?;
            let request = ServiceRequestCreate {
                employee_id: ctx.employee_id()?,
                asset_id,
                issue_type,
                description,
            };
            api(
                client.create_service_request(&request),
                "Failed to create service request",
            )?
        }
        ServiceRequestCommands::Update { id, status } => {
            ctx.require_admin()?;
            api(
                client.update_service_request(id, &status),
                "Failed to update service request",
            )?
        }
    };
    print_body(&response)
}

pub(super) fn handle_audit_command(ctx: &Ctx, command: AuditCommands) -> Result<()> {
    let client = &ctx.client;
    let response = match command {
        AuditCommands::List => {
            ctx.require_admin()?;
            api(client.get_all_audits(), "Failed to load audits")?
        }
        AuditCommands::Mine { status } => {
            ctx.require_session()?;
            let status = status
                .as_deref()
                .map(str::parse::<AuditStatus>)
                .transpose()?;
            let mut audits = view(
                views::my_audits(client, &ctx.session),
                "Failed to load your audits",
            )?;
            if let Some(status) = status {
                audits.retain(|a| a.audit_status() == Some(status));
            }
            return print_json(&audits);
        }
        AuditCommands::Get { id } => {
            ctx.require_session()?;
            api(client.get_audit_by_id(id), "Failed to load audit")?
        }
        AuditCommands::ByEmployee { employee_id } => {
            ctx.require_admin()?;
            api(
                client.get_audits_by_employee(employee_id),
                "Failed to load audits",
            )?
        }
        AuditCommands::Send {
            employee_id,
            asset_id,
        } => {
            ctx.require_admin()?;
            api(client.send_audit(employee_id, asset_id), "Failed to send audit")?
        }
        AuditCommands::Decide { id, action } => {
            ctx.require_session()?;
            api(
                client.update_audit_decision(id, &AuditDecisionRequest { action }),
                "Failed to record audit decision",
            )?
        }
    };
    print_body(&response)
}
