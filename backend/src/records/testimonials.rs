// src/records/testimonials.rs
//
// Fixed testimonial content served by GET /api/testimonials. Not persisted.

use crate::records::models::Testimonial;

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: "1",
        name: "Sarah Johnson",
        role: "CTO, TechCorp Inc.",
        content: "Origem transformed our Salesforce implementation completely. Their expertise and dedication made the entire process seamless. Highly recommended!",
        rating: 5,
        image: "https://ui-avatars.com/api/?name=Sarah+Johnson&background=059669&color=fff",
    },
    Testimonial {
        id: "2",
        name: "Michael Chen",
        role: "CEO, Digital Solutions",
        content: "The mobile app they developed exceeded our expectations. Professional team, excellent communication, and delivered on time.",
        rating: 5,
        image: "https://ui-avatars.com/api/?name=Michael+Chen&background=059669&color=fff",
    },
    Testimonial {
        id: "3",
        name: "Emily Rodriguez",
        role: "Marketing Director, GrowthHub",
        content: "Our website redesign was a game-changer. Origem's creative approach and technical skills resulted in a stunning, high-performing site.",
        rating: 5,
        image: "https://ui-avatars.com/api/?name=Emily+Rodriguez&background=059669&color=fff",
    },
];

pub fn list_testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}
