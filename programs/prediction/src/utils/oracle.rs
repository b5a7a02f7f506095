use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::constants::PRICE_DECIMALS;
use crate::errors::PredictionError;

/// Rescales a Pyth price (`price * 10^exponent`) to the engine's fixed
/// 8-decimal representation.
pub fn normalize_price(price: i64, exponent: i32) -> Result<i64> {
    let scale = PRICE_DECIMALS
        .checked_add(exponent)
        .ok_or(PredictionError::MathOverflow)?;
    let normalized = if scale >= 0 {
        let mul = 10i128
            .checked_pow(scale as u32)
            .ok_or(PredictionError::MathOverflow)?;
        (price as i128)
            .checked_mul(mul)
            .ok_or(PredictionError::MathOverflow)?
    } else {
        let div = 10i128
            .checked_pow(scale.unsigned_abs())
            .ok_or(PredictionError::MathOverflow)?;
        (price as i128)
            .checked_div(div)
            .ok_or(PredictionError::MathOverflow)?
    };
    require!(normalized > 0, PredictionError::InvalidPrice);
    i64::try_from(normalized).map_err(|_| PredictionError::MathOverflow.into())
}

/// Reads one `(publish_time, price)` sample from a posted price update,
/// checking feed identity and normalizing the price. Freshness and replay
/// checks live on `Config::consume_oracle`; this only validates the reading
/// itself.
pub fn read_validated_price(
    price_update: &PriceUpdateV2,
    feed_id: &[u8; 32],
) -> Result<(i64, i64)> {
    let message = &price_update.price_message;
    require!(
        message.feed_id == *feed_id,
        PredictionError::OracleFeedMismatch
    );
    let price = normalize_price(message.price, message.exponent)?;
    Ok((message.publish_time, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyth_solana_receiver_sdk::price_update::{PriceFeedMessage, VerificationLevel};

    fn update(feed_id: [u8; 32], price: i64, exponent: i32, publish_time: i64) -> PriceUpdateV2 {
        PriceUpdateV2 {
            write_authority: Pubkey::default(),
            verification_level: VerificationLevel::Full,
            price_message: PriceFeedMessage {
                feed_id,
                price,
                conf: 0,
                exponent,
                publish_time,
                prev_publish_time: publish_time - 1,
                ema_price: price,
                ema_conf: 0,
            },
            posted_slot: 0,
        }
    }

    #[test]
    fn normalize_keeps_native_eight_decimals() {
        assert_eq!(normalize_price(2_100_00000000, -8).unwrap(), 2_100_00000000);
    }

    #[test]
    fn normalize_scales_up_coarser_exponents() {
        // 2100.50 quoted with 2 decimals.
        assert_eq!(normalize_price(210_050, -2).unwrap(), 2_100_50000000);
        // Whole-unit quote.
        assert_eq!(normalize_price(2_100, 0).unwrap(), 2_100_00000000);
    }

    #[test]
    fn normalize_scales_down_finer_exponents() {
        assert_eq!(normalize_price(2_100_0000000000, -10).unwrap(), 2_100_00000000);
    }

    #[test]
    fn normalize_rejects_non_positive_results() {
        assert!(normalize_price(0, -8).is_err());
        assert!(normalize_price(-2_100, -8).is_err());
        // Positive but rounds down to zero after rescale.
        assert!(normalize_price(5, -10).is_err());
    }

    #[test]
    fn read_rejects_wrong_feed() {
        let u = update([1u8; 32], 2_100_00000000, -8, 1_000);
        assert!(read_validated_price(&u, &[2u8; 32]).is_err());
    }

    #[test]
    fn read_returns_publish_time_and_normalized_price() {
        let u = update([1u8; 32], 210_050, -2, 1_000);
        let (ts, price) = read_validated_price(&u, &[1u8; 32]).unwrap();
        assert_eq!(ts, 1_000);
        assert_eq!(price, 2_100_50000000);
    }
}
