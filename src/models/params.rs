//! Cost-reporting parameters that travel with a date range into the dashboard URL.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    BilledCost,
    DiscountedCost,
    DiscountedAmortizedCost,
    AmortizedCost,
    InvoicedAmortizedCost,
    RealCost,
    OnDemandCost,
}

impl CostType {
    pub const ALL: [CostType; 7] = [
        CostType::BilledCost,
        CostType::DiscountedCost,
        CostType::DiscountedAmortizedCost,
        CostType::AmortizedCost,
        CostType::InvoicedAmortizedCost,
        CostType::RealCost,
        CostType::OnDemandCost,
    ];

    /// Value used in the `activeCostType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CostType::BilledCost => "billed_cost",
            CostType::DiscountedCost => "discounted_cost",
            CostType::DiscountedAmortizedCost => "discounted_amortized_cost",
            CostType::AmortizedCost => "amortized_cost",
            CostType::InvoicedAmortizedCost => "invoiced_amortized_cost",
            CostType::RealCost => "real_cost",
            CostType::OnDemandCost => "on_demand_cost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostType::BilledCost => "Billed Cost",
            CostType::DiscountedCost => "Discounted Cost",
            CostType::DiscountedAmortizedCost => "Discounted Amortized Cost",
            CostType::AmortizedCost => "Amortized Cost",
            CostType::InvoicedAmortizedCost => "Invoiced Amortized Cost",
            CostType::RealCost => "Real Cost",
            CostType::OnDemandCost => "On-Demand Cost",
        }
    }
}

impl FromStr for CostType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        CostType::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AppError::InvalidParam("cost type", s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Daily, Granularity::Weekly, Granularity::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
        }
    }
}

impl FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidParam("granularity", s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    Account,
    BillingLineItem,
    CloudProvider,
    GenaiModel,
    GenaiModelFamily,
    GenaiPlatform,
    GenaiTokenType,
    InstanceType,
    NetworkingCategory,
    NetworkingSubCategory,
    PaymentOption,
    Region,
    ResourceSummary,
    ResourceType,
    Service,
    ServiceCategory,
    ServiceDetail,
    TaggableVsUntaggable,
    UsageFamily,
}

impl GroupBy {
    pub const ALL: [GroupBy; 19] = [
        GroupBy::Account,
        GroupBy::BillingLineItem,
        GroupBy::CloudProvider,
        GroupBy::GenaiModel,
        GroupBy::GenaiModelFamily,
        GroupBy::GenaiPlatform,
        GroupBy::GenaiTokenType,
        GroupBy::InstanceType,
        GroupBy::NetworkingCategory,
        GroupBy::NetworkingSubCategory,
        GroupBy::PaymentOption,
        GroupBy::Region,
        GroupBy::ResourceSummary,
        GroupBy::ResourceType,
        GroupBy::Service,
        GroupBy::ServiceCategory,
        GroupBy::ServiceDetail,
        GroupBy::TaggableVsUntaggable,
        GroupBy::UsageFamily,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Account => "account",
            GroupBy::BillingLineItem => "billing_line_item",
            GroupBy::CloudProvider => "cloud_provider",
            GroupBy::GenaiModel => "genai_model",
            GroupBy::GenaiModelFamily => "genai_model_family",
            GroupBy::GenaiPlatform => "genai_platform",
            GroupBy::GenaiTokenType => "genai_token_type",
            GroupBy::InstanceType => "instance_type",
            GroupBy::NetworkingCategory => "networking_category",
            GroupBy::NetworkingSubCategory => "networking_sub_category",
            GroupBy::PaymentOption => "payment_option",
            GroupBy::Region => "region",
            GroupBy::ResourceSummary => "resource_summary",
            GroupBy::ResourceType => "resource_type",
            GroupBy::Service => "service",
            GroupBy::ServiceCategory => "service_category",
            GroupBy::ServiceDetail => "service_detail",
            GroupBy::TaggableVsUntaggable => "taggable_vs_untaggable",
            GroupBy::UsageFamily => "usage_family",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Account => "Account",
            GroupBy::BillingLineItem => "Billing Line Item",
            GroupBy::CloudProvider => "Cloud Provider",
            GroupBy::GenaiModel => "GenAI Model",
            GroupBy::GenaiModelFamily => "GenAI Model Family",
            GroupBy::GenaiPlatform => "GenAI Platform",
            GroupBy::GenaiTokenType => "GenAI Token Type",
            GroupBy::InstanceType => "Instance Type",
            GroupBy::NetworkingCategory => "Networking Category",
            GroupBy::NetworkingSubCategory => "Networking Sub-Category",
            GroupBy::PaymentOption => "Payment Option",
            GroupBy::Region => "Region",
            GroupBy::ResourceSummary => "Resource Summary",
            GroupBy::ResourceType => "Resource Type",
            GroupBy::Service => "Service",
            GroupBy::ServiceCategory => "Service Category",
            GroupBy::ServiceDetail => "Service Detail",
            GroupBy::TaggableVsUntaggable => "Taggable vs. Untaggable",
            GroupBy::UsageFamily => "Usage Family",
        }
    }

    /// Parse a group-by value; empty input and "none" both mean "no grouping".
    pub fn parse_optional(s: &str) -> Result<Option<Self>, AppError> {
        let wanted = s.trim().replace('-', "_");
        if wanted.is_empty() || wanted.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        GroupBy::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(&wanted))
            .map(Some)
            .ok_or_else(|| AppError::InvalidParam("group-by", s.to_string()))
    }
}

/// Optional overrides carried by a saved filter or passed on the command line.
/// `None` means "use the configured default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedParams {
    #[serde(default)]
    pub cost_type: Option<CostType>,
    #[serde(default)]
    pub granularity: Option<Granularity>,
    #[serde(default)]
    pub group_by: Option<GroupBy>,
    #[serde(default)]
    pub filters: Option<String>,
}

impl AdvancedParams {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: &AdvancedParams) -> AdvancedParams {
        AdvancedParams {
            cost_type: self.cost_type.or(fallback.cost_type),
            granularity: self.granularity.or(fallback.granularity),
            group_by: self.group_by.or(fallback.group_by),
            filters: self.filters.or_else(|| fallback.filters.clone()),
        }
    }
}
