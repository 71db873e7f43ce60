use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::floating_button::FloatingButton;
use crate::components::lead_form::LeadFormSection;
use crate::components::mobile_nav::{use_mobile_nav, MobileMenu};
use crate::components::notification::{use_notification, NotificationBanner};
use crate::components::service_cards::ServiceCards;
use crate::components::site_header::SiteHeader;
use crate::config;

#[function_component(Landing)]
pub fn landing() -> Html {
    let notification = use_notification();
    let mobile_nav = use_mobile_nav();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        background: #fff;
                        transition: box-shadow 0.3s ease;
                    }
                    .header.scrolled {
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.12);
                    }
                    .header-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem;
                    }
                    .header-links a {
                        margin: 0 0.75rem;
                        color: #1d3557;
                        text-decoration: none;
                    }
                    .mobile-menu-btn {
                        display: none;
                        background: none;
                        border: none;
                    }
                    .mobile-menu-btn span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #1d3557;
                    }
                    .mobile-menu {
                        position: fixed;
                        top: 0;
                        right: -280px;
                        width: 280px;
                        height: 100vh;
                        background: #fff;
                        z-index: 300;
                        transition: right 0.3s ease;
                    }
                    .mobile-menu.active {
                        right: 0;
                    }
                    .mobile-menu-links a {
                        display: block;
                        padding: 1rem 1.5rem;
                        color: #1d3557;
                        text-decoration: none;
                    }
                    .overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        opacity: 0;
                        visibility: hidden;
                        z-index: 200;
                        transition: opacity 0.3s ease;
                    }
                    .overlay.active {
                        opacity: 1;
                        visibility: visible;
                    }
                    .hero {
                        padding: 8rem 1rem 4rem;
                        text-align: center;
                        background: linear-gradient(135deg, #1d3557, #457b9d);
                        color: #fff;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .service-card {
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: #f1faee;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .service-card.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .service-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 520px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .submit-btn {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.9rem;
                        border: none;
                        border-radius: 8px;
                        background: #e63946;
                        color: #fff;
                        font-weight: bold;
                    }
                    .submit-btn:disabled {
                        opacity: 0.7;
                    }
                    .spinner {
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255, 255, 255, 0.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .notification {
                        position: fixed;
                        top: 90px;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 1rem 1.5rem;
                        border-radius: 8px;
                        color: #fff;
                        z-index: 400;
                    }
                    .notification.success {
                        background: #2a9d8f;
                    }
                    .notification.error {
                        background: #e63946;
                    }
                    .floating-buttons {
                        position: fixed;
                        right: 1rem;
                        bottom: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 150;
                    }
                    .floating-button {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        background: #e63946;
                        color: #fff;
                        text-decoration: none;
                    }
                    .floating-button.zalo {
                        background: #0068ff;
                    }
                    .floating-button .tooltip {
                        position: absolute;
                        right: 70px;
                        white-space: nowrap;
                        padding: 0.4rem 0.8rem;
                        border-radius: 6px;
                        background: #1d3557;
                        transition: opacity 0.2s ease;
                    }
                    @media (max-width: 768px) {
                        .header-links {
                            display: none;
                        }
                        .mobile-menu-btn {
                            display: block;
                        }
                    }
                "#}
            </style>
            <SiteHeader on_open_menu={mobile_nav.open.clone()} on_close_menu={mobile_nav.close.clone()} />
            <MobileMenu open={mobile_nav.is_open} on_close={mobile_nav.close.clone()} />
            <section class="hero">
                <h1>{"Thợ sửa chữa tận nhà trong 30 phút"}</h1>
                <p>{"Điện, nước, điện lạnh. Báo giá trước, bảo hành sau."}</p>
                <AnchorLink href="#contact" class="cta-button" on_navigate={mobile_nav.close.clone()}>
                    {"Đặt lịch ngay"}
                </AnchorLink>
            </section>
            <ServiceCards />
            <section id="why-us" class="why-us">
                <h2 class="section-title">{"Vì sao chọn chúng tôi"}</h2>
                <ul>
                    <li>{"Có mặt trong 30 phút tại nội thành"}</li>
                    <li>{"Giá niêm yết, không phát sinh"}</li>
                    <li>{"Bảo hành 6 tháng cho mọi hạng mục"}</li>
                </ul>
            </section>
            <LeadFormSection on_notify={notification.show.clone()} />
            <footer id="footer" class="footer">
                <p>{"Hotline: "}<a href={config::HOTLINE_TEL}>{config::HOTLINE}</a></p>
            </footer>
            <NotificationBanner state={(*notification.state).clone()} />
            <div class="floating-buttons">
                <FloatingButton href={config::HOTLINE_TEL} icon="📞" tooltip={config::HOTLINE} />
                <FloatingButton href={config::ZALO_URL} icon="💬" tooltip="Chat Zalo" class="zalo" />
            </div>
        </div>
    }
}
