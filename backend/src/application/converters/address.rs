use crate::application::dto::{CartAddress, OrderAddress};
use crate::domain::entities::{Address, AddressType};

fn parse_address_type(raw: Option<&str>) -> Option<AddressType> {
    raw.and_then(|value| value.parse().ok())
}

impl From<&CartAddress> for Address {
    fn from(dto: &CartAddress) -> Self {
        Address {
            address_type: parse_address_type(dto.address_type.as_deref()),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            organization: dto.organization.clone(),
            line1: dto.line1.clone(),
            line2: dto.line2.clone(),
            city: dto.city.clone(),
            region_id: dto.region_id.clone(),
            region_name: dto.region_name.clone(),
            postal_code: dto.postal_code.clone(),
            country_code: dto.country_code.clone(),
            country_name: dto.country_name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
        }
    }
}

impl From<&Address> for CartAddress {
    fn from(address: &Address) -> Self {
        CartAddress {
            address_type: address.address_type.map(|t| t.as_str().to_string()),
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            organization: address.organization.clone(),
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            city: address.city.clone(),
            region_id: address.region_id.clone(),
            region_name: address.region_name.clone(),
            postal_code: address.postal_code.clone(),
            country_code: address.country_code.clone(),
            country_name: address.country_name.clone(),
            email: address.email.clone(),
            phone: address.phone.clone(),
        }
    }
}

impl From<&OrderAddress> for Address {
    fn from(dto: &OrderAddress) -> Self {
        Address {
            address_type: parse_address_type(dto.address_type.as_deref()),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            organization: dto.organization.clone(),
            line1: dto.line1.clone(),
            line2: dto.line2.clone(),
            city: dto.city.clone(),
            region_id: dto.region_id.clone(),
            region_name: dto.region_name.clone(),
            postal_code: dto.postal_code.clone(),
            country_code: dto.country_code.clone(),
            country_name: dto.country_name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_address_round_trip() {
        let dto = CartAddress {
            address_type: Some("Shipping".to_string()),
            first_name: Some("Ada".to_string()),
            line1: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            country_code: Some("USA".to_string()),
            ..Default::default()
        };

        let address = Address::from(&dto);
        assert_eq!(address.address_type, Some(AddressType::Shipping));
        assert_eq!(address.city.as_deref(), Some("Springfield"));

        assert_eq!(CartAddress::from(&address), dto);
    }

    #[test]
    fn test_unknown_address_type_is_dropped() {
        let dto = OrderAddress {
            address_type: Some("Warehouse".to_string()),
            postal_code: Some("12345".to_string()),
            ..Default::default()
        };

        let address = Address::from(&dto);
        assert_eq!(address.address_type, None);
        assert_eq!(address.postal_code.as_deref(), Some("12345"));
    }
}
