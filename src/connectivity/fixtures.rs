use rand::Rng;
use serde::Serialize;

/// Synthetic fixture values used to populate request bodies.
///
/// Generated once per run; nothing here is persisted or carries identity
/// beyond the run.
#[derive(Debug, Serialize)]
pub struct VirtualTestData {
    pub user: VirtualUser,
    pub product: VirtualProduct,
    pub order: VirtualOrder,
    pub finance: VirtualFinance,
}

#[derive(Debug, Serialize)]
pub struct VirtualUser {
    pub phone: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct VirtualProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: u32,
    pub stock: u32,
    pub unit: String,
    pub origin: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualOrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualOrder {
    pub items: Vec<VirtualOrderItem>,
    pub address_id: String,
    pub remark: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualFinance {
    pub amount: u32,
    pub term_months: u32,
    pub purpose: String,
    pub product_id: String,
}

impl VirtualTestData {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let phone_suffix: u32 = rng.gen_range(10_000_000..=99_999_999);

        VirtualTestData {
            user: VirtualUser {
                phone: format!("138{:08}", phone_suffix),
                password: "VirtualTest@123456".to_string(),
                email: "virtual.test@example.com".to_string(),
                name: "Virtual test user".to_string(),
                role: "farmer".to_string(),
            },
            product: VirtualProduct {
                name: format!("Virtual test product {}", rng.gen_range(1000..=9999)),
                description: "Synthetic product created by the connectivity test".to_string(),
                category: "Vegetables".to_string(),
                price: rng.gen_range(10..=100),
                stock: rng.gen_range(50..=500),
                unit: "kg".to_string(),
                origin: "Virtual origin".to_string(),
            },
            order: VirtualOrder {
                items: vec![VirtualOrderItem {
                    product_id: "virtual-product-id".to_string(),
                    quantity: 2,
                    price: 10.5,
                }],
                address_id: "virtual-address-id".to_string(),
                remark: "Virtual test order".to_string(),
            },
            finance: VirtualFinance {
                amount: 50_000,
                term_months: 12,
                purpose: "Virtual financing purpose".to_string(),
                product_id: "virtual-loan-product-id".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_a_plausible_mobile_number() {
        let data = VirtualTestData::generate();
        assert_eq!(data.user.phone.len(), 11);
        assert!(data.user.phone.starts_with("138"));
        assert!(data.user.phone.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn product_values_stay_in_range() {
        let data = VirtualTestData::generate();
        assert!((10..=100).contains(&data.product.price));
        assert!((50..=500).contains(&data.product.stock));
    }

    #[test]
    fn payloads_serialize_with_backend_field_names() {
        let data = VirtualTestData::generate();
        let finance = serde_json::to_value(&data.finance).unwrap();
        assert!(finance.get("termMonths").is_some());
        assert!(finance.get("productId").is_some());

        let order = serde_json::to_value(&data.order).unwrap();
        assert!(order.get("addressId").is_some());
        assert!(order["items"][0].get("productId").is_some());
    }
}
