//! Bundled sample data: simulated product reviews.

use crate::Review;

pub const SAMPLE_REVIEWS: &[&str] = &[
    "I absolutely love my new iPhone 14 Pro from Apple! The camera quality is amazing and the battery life is excellent. Highly recommend this product.",
    "The Samsung Galaxy S23 is okay, but I expected better performance. The screen is nice but the battery drains too quickly. Not worth the price.",
    "Terrible experience with this Sony WH-1000XM4 headphones. The sound quality is poor and they broke after just one week. Very disappointed.",
    "Amazing product! The MacBook Air M2 from Apple exceeded all my expectations. Fast, lightweight, and perfect for work. Five stars!",
    "The Nike Air Max 270 shoes are comfortable but overpriced. Good quality materials but not worth $150. Would not buy again.",
    "Excellent service and product quality. The Dell XPS 13 laptop arrived quickly and works perfectly. Great customer support from Dell.",
    "The Amazon Echo Dot is a fantastic smart speaker. Easy to set up and Alexa responds quickly. Great value for money!",
    "Disappointed with the Google Pixel 7. The camera is good but the phone feels cheap and plastic. Expected better from Google.",
    "Love my new AirPods Pro from Apple! Great noise cancellation and sound quality. Perfect for workouts and commuting.",
    "The Microsoft Surface Pro 8 is versatile but expensive. Good for drawing and note-taking but the keyboard feels flimsy.",
];

/// The sample reviews numbered from 1.
pub fn sample_reviews() -> Vec<Review> {
    Review::batch(SAMPLE_REVIEWS.iter().copied())
}
