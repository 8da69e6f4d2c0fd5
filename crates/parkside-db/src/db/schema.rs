diesel::table! {
    app_user (id) {
        id -> Uuid,
        username -> Text,
        password_hash -> Text,
        role -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    national_park (id) {
        id -> Uuid,
        name -> Text,
        state -> Text,
        established -> Date,
        picture -> Nullable<Bytea>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    trail (id) {
        id -> Uuid,
        name -> Text,
        distance_km -> Float8,
        elevation_gain_m -> Float8,
        difficulty -> Text,
        national_park_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(trail -> national_park (national_park_id));

diesel::allow_tables_to_appear_in_same_query!(app_user, national_park, trail);
