mod test_empty_room_cleanup;
