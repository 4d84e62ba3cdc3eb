//! Selector and route contract of the target storefront.
//!
//! The site is addressed purely by CSS selectors and `data-qa` attributes.
//! These are an external contract the suite depends on; when the storefront
//! markup changes, this is the one file to update.

/// Product catalog and cart
pub mod shop {
    /// Header link to the product catalog
    pub const PRODUCTS_LINK: &str = "a[href=\"/products\"]";
    /// Catalog route fragment
    pub const PRODUCTS_ROUTE: &str = "/products";
    /// Detail link of the third catalog entry (product id 3)
    pub const THIRD_PRODUCT_LINK: &str =
        ".features_items .col-sm-4 a[href=\"/product_details/3\"]";
    /// Detail route fragment of the third catalog entry
    pub const THIRD_PRODUCT_ROUTE: &str = "/product_details/3";
    /// Quantity input on the product detail page
    pub const QUANTITY_INPUT: &str = "#quantity";
    /// Add-to-cart button on the product detail page
    pub const ADD_TO_CART_BUTTON: &str =
        ".product-details .product-information button.cart";
    /// "View Cart" link inside the added-to-cart modal
    pub const CART_MODAL_VIEW_CART: &str = "#cartModal a[href=\"/view_cart\"]";
    /// Cart view route fragment
    pub const CART_ROUTE: &str = "/view_cart";
    /// Quantity control inside the cart summary
    pub const CART_QUANTITY: &str = ".cart_quantity button.disabled";
    /// Proceed-to-checkout button on the cart page
    pub const PROCEED_TO_CHECKOUT: &str = "a.btn.btn-default.check_out";
    /// Login link inside the unauthenticated-checkout modal
    pub const CHECKOUT_MODAL_LOGIN: &str =
        ".modal-content .modal-body a[href=\"/login\"]";
    /// Cart link in the shop navbar
    pub const NAV_CART_LINK: &str =
        ".shop-menu .nav.navbar-nav a[href=\"/view_cart\"]";
    /// Order comment box on the checkout page
    pub const ORDER_COMMENT: &str = "textarea";
}

/// Authentication and signup
pub mod auth {
    /// Authentication route fragment
    pub const LOGIN_ROUTE: &str = "/login";
    /// Header link to the authentication page
    pub const LOGIN_LINK: &str = "a[href=\"/login\"]";
    /// Signup name input
    pub const SIGNUP_NAME: &str = "input[data-qa=\"signup-name\"]";
    /// Signup email input
    pub const SIGNUP_EMAIL: &str = "input[data-qa=\"signup-email\"]";
    /// Signup submit button
    pub const SIGNUP_BUTTON: &str = "button[data-qa=\"signup-button\"]";

    /// Pre-filled name on the account details page
    pub const ACCOUNT_NAME: &str = "[data-qa=\"name\"]";
    /// Pre-filled email on the account details page
    pub const ACCOUNT_EMAIL: &str = "[data-qa=\"email\"]";
    /// Password input
    pub const PASSWORD: &str = "[data-qa=\"password\"]";
    /// Date-of-birth day select
    pub const BIRTH_DAY: &str = "[data-qa=\"days\"]";
    /// Date-of-birth month select
    pub const BIRTH_MONTH: &str = "[data-qa=\"months\"]";
    /// Date-of-birth year select
    pub const BIRTH_YEAR: &str = "[data-qa=\"years\"]";
    /// Newsletter opt-in checkbox
    pub const NEWSLETTER: &str = "#newsletter";
    /// Special-offers opt-in checkbox
    pub const OPT_IN: &str = "#optin";
    /// Address first name
    pub const FIRST_NAME: &str = "[data-qa=\"first_name\"]";
    /// Address last name
    pub const LAST_NAME: &str = "[data-qa=\"last_name\"]";
    /// Company
    pub const COMPANY: &str = "[data-qa=\"company\"]";
    /// Street address
    pub const ADDRESS: &str = "[data-qa=\"address\"]";
    /// Country select
    pub const COUNTRY: &str = "[data-qa=\"country\"]";
    /// State
    pub const STATE: &str = "[data-qa=\"state\"]";
    /// City
    pub const CITY: &str = "[data-qa=\"city\"]";
    /// Zipcode
    pub const ZIPCODE: &str = "[data-qa=\"zipcode\"]";
    /// Mobile number
    pub const MOBILE_NUMBER: &str = "[data-qa=\"mobile_number\"]";
    /// Create-account submit button
    pub const CREATE_ACCOUNT: &str = "[data-qa=\"create-account\"]";

    /// Account-created route fragment
    pub const ACCOUNT_CREATED_ROUTE: &str = "/account_created";
    /// Account-created heading
    pub const ACCOUNT_CREATED_TITLE: &str = "[data-qa=\"account-created\"]";
    /// First confirmation paragraph (fixed position)
    pub const ACCOUNT_CREATED_P1: &str = ".container .col-sm-9 p:nth-of-type(1)";
    /// Second confirmation paragraph (fixed position)
    pub const ACCOUNT_CREATED_P2: &str = ".container .col-sm-9 p:nth-of-type(2)";
    /// Continue button on the confirmation page
    pub const CONTINUE_BUTTON: &str = "[data-qa=\"continue-button\"]";

    /// Logout link in the shop navbar
    pub const LOGOUT_LINK: &str = "a[href=\"/logout\"]";
}

/// Payment and order confirmation
pub mod payment {
    /// Place-order button on the checkout page
    pub const PLACE_ORDER: &str = "a[href=\"/payment\"].btn.btn-default.check_out";
    /// Payment route fragment
    pub const PAYMENT_ROUTE: &str = "/payment";
    /// Name-on-card input
    pub const NAME_ON_CARD: &str = "[data-qa=\"name-on-card\"]";
    /// Card number input
    pub const CARD_NUMBER: &str = "[data-qa=\"card-number\"]";
    /// CVC input
    pub const CVC: &str = "[data-qa=\"cvc\"]";
    /// Expiry month input
    pub const EXPIRY_MONTH: &str = "[data-qa=\"expiry-month\"]";
    /// Expiry year input
    pub const EXPIRY_YEAR: &str = "[data-qa=\"expiry-year\"]";
    /// Pay-and-confirm button
    pub const PAY_BUTTON: &str = "[data-qa=\"pay-button\"]";

    /// Order-placed heading
    pub const ORDER_PLACED_TITLE: &str =
        ".col-sm-9.col-sm-offset-1 h2.title[data-qa=\"order-placed\"]";
    /// Bold text inside the order-placed heading
    pub const ORDER_PLACED_TITLE_BOLD: &str =
        ".col-sm-9.col-sm-offset-1 h2.title[data-qa=\"order-placed\"] b";
    /// Confirmation paragraph next to the heading
    pub const ORDER_CONFIRMED_TEXT: &str = ".col-sm-9.col-sm-offset-1 p";
}
